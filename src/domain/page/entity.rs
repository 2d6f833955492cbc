// src/domain/page/entity.rs
use crate::domain::page::value_objects::{PageContent, PageId, PageSlug, PageSummary, PageTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub slug: PageSlug,
    pub content: PageContent,
    pub summary: PageSummary,
    pub notes: Option<String>,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Replace the content and re-derive the summary in the same step, so the
    /// two can never drift apart.
    pub fn set_content(&mut self, content: PageContent, now: DateTime<Utc>) {
        self.summary = PageSummary::derive(&content);
        self.content = content;
        self.updated_at = now;
    }

    /// Change the title. The slug is deliberately left untouched; only an
    /// explicit administrative reset recomputes it.
    pub fn rename(&mut self, title: PageTitle, now: DateTime<Utc>) {
        self.title = title;
        self.updated_at = now;
    }

    pub fn set_notes(&mut self, notes: Option<String>, now: DateTime<Utc>) {
        self.notes = notes;
        self.updated_at = now;
    }

    pub fn set_privacy(&mut self, is_private: bool, now: DateTime<Utc>) {
        self.is_private = is_private;
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: PageSlug) {
        self.slug = slug;
    }
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: PageTitle,
    pub slug: PageSlug,
    pub content: PageContent,
    pub summary: PageSummary,
    pub notes: Option<String>,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPage {
    /// Assemble the initial state of a page: the summary is derived from the
    /// content here and both timestamps start at `now`.
    pub fn compose(
        title: PageTitle,
        slug: PageSlug,
        content: PageContent,
        notes: Option<String>,
        is_private: bool,
        now: DateTime<Utc>,
    ) -> Self {
        let summary = PageSummary::derive(&content);
        Self {
            title,
            slug,
            content,
            summary,
            notes,
            is_private,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full-state edit of a page. The slug is absent on purpose: edits never
/// touch it, and the administrative reset path goes through
/// [`PageWriteRepository::set_slug`](crate::domain::page::PageWriteRepository).
#[derive(Debug, Clone)]
pub struct PageUpdate {
    pub id: PageId,
    pub title: PageTitle,
    pub content: PageContent,
    pub summary: PageSummary,
    pub notes: Option<String>,
    pub is_private: bool,
    pub updated_at: DateTime<Utc>,
}

impl PageUpdate {
    pub fn from_page(page: &Page) -> Self {
        Self {
            id: page.id,
            title: page.title.clone(),
            content: page.content.clone(),
            summary: page.summary.clone(),
            notes: page.notes.clone(),
            is_private: page.is_private,
            updated_at: page.updated_at,
        }
    }
}
