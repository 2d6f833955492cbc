use crate::domain::errors::{DomainError, DomainResult};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub i64);

impl PageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("page id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PageId> for i64 {
    fn from(value: PageId) -> Self {
        value.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PageTitle> for String {
    fn from(value: PageTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlug(String);

impl PageSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PageSlug> for String {
    fn from(value: PageSlug) -> Self {
        value.0
    }
}

/// Raw page content as the author wrote it. May be empty; absent content is
/// treated as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent(String);

impl PageContent {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn from_optional(value: Option<String>) -> Self {
        Self(value.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PageContent> for String {
    fn from(value: PageContent) -> Self {
        value.0
    }
}

static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?[^>]+/?>").expect("markup pattern is valid")
});
static NON_PROSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9,.?!]").expect("non-prose pattern is valid")
});
static PUNCT_SPACING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*([,.?!])\s*").expect("punctuation pattern is valid")
});
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

const SUMMARY_MAX_CHARS: usize = 100;

/// Plain-text preview derived from content. Never stale: every content write
/// re-derives it through [`PageSummary::derive`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary(String);

impl PageSummary {
    /// Wrap a previously derived summary, e.g. when hydrating from storage.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Reduce content to a bounded plain-text excerpt.
    ///
    /// Markup tags are deleted, everything that is not an ASCII letter,
    /// digit or sentence punctuation becomes a space, punctuation is
    /// re-spaced to `punct + " "`, whitespace runs collapse to one space,
    /// and anything past 100 characters is cut with a `...` marker.
    pub fn derive(content: &PageContent) -> Self {
        let stripped = MARKUP.replace_all(content.as_str(), "");
        let cleaned = NON_PROSE.replace_all(&stripped, " ");
        let normalized = PUNCT_SPACING.replace_all(&cleaned, "${1} ");
        let condensed = SPACE_RUNS.replace_all(&normalized, " ").into_owned();

        if condensed.chars().count() > SUMMARY_MAX_CHARS {
            let head: String = condensed.chars().take(SUMMARY_MAX_CHARS).collect();
            Self(format!("{head}..."))
        } else {
            Self(condensed)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PageSummary> for String {
    fn from(value: PageSummary) -> Self {
        value.0
    }
}
