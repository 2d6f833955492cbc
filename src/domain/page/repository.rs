use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page, PageUpdate};
use crate::domain::page::value_objects::{PageId, PageSlug, PageSummary, PageTitle};
use crate::domain::tag::TagId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PageWriteRepository: Send + Sync {
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;
    async fn update(&self, update: PageUpdate) -> DomainResult<Page>;
    /// Administrative slug reset. Leaves `updated_at` untouched.
    async fn set_slug(&self, id: PageId, slug: &PageSlug) -> DomainResult<()>;
    /// Administrative summary rewrite. Leaves `updated_at` untouched.
    async fn set_summary(&self, id: PageId, summary: &PageSummary) -> DomainResult<()>;
    async fn set_created_at(&self, id: PageId, at: DateTime<Utc>) -> DomainResult<()>;
    async fn set_updated_at(&self, id: PageId, at: DateTime<Utc>) -> DomainResult<()>;
}

#[async_trait]
pub trait PageReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>>;
    async fn find_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>>;
    async fn find_by_title(&self, title: &PageTitle) -> DomainResult<Option<Page>>;
    /// Existence predicate backing unique-slug generation.
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool>;
    /// Pages ordered by title, with private pages filtered out unless
    /// requested. Returns the page of results and the total row count.
    async fn list_paginated(
        &self,
        include_private: bool,
        page: u32,
        per_page: u32,
    ) -> DomainResult<(Vec<Page>, u64)>;
    async fn list_by_tag(&self, tag_id: TagId, include_private: bool) -> DomainResult<Vec<Page>>;
}
