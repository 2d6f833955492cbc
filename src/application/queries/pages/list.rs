// src/application/queries/pages/list.rs
use super::PageQueryService;
use crate::application::{
    dto::{AuthenticatedUser, PageDto, Paged},
    error::ApplicationResult,
};

pub struct ListPagesQuery {
    pub page: u32,
    pub per_page: u32,
}

const DEFAULT_PER_PAGE: u32 = 20;
const MAX_PER_PAGE: u32 = 100;

impl PageQueryService {
    /// All pages ordered by title. Private pages appear only for an
    /// authenticated actor.
    pub async fn list_pages(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListPagesQuery,
    ) -> ApplicationResult<Paged<PageDto>> {
        let include_private = actor.is_some();
        let page = query.page.max(1);
        let per_page = if query.per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            query.per_page.min(MAX_PER_PAGE)
        };

        let (records, total) = self
            .read_repo
            .list_paginated(include_private, page, per_page)
            .await?;

        let mut items = Vec::with_capacity(records.len());
        for record in records {
            items.push(self.to_dto(record).await?);
        }

        Ok(Paged::new(items, total, page, per_page))
    }
}
