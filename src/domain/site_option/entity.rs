// src/domain/site_option/entity.rs

/// A single `name -> value` site configuration row. Well-known names include
/// `hashed_password`, `sitename`, `author` and `main_page`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOption {
    pub name: String,
    pub value: Option<String>,
}

impl SiteOption {
    pub const HASHED_PASSWORD: &'static str = "hashed_password";
    pub const SITENAME: &'static str = "sitename";
    pub const AUTHOR: &'static str = "author";
    pub const MAIN_PAGE: &'static str = "main_page";
}
