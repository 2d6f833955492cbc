// src/application/queries/pages/get_by_slug.rs
use super::PageQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::PageSlug,
};

pub struct GetPageBySlugQuery {
    pub slug: String,
}

impl PageQueryService {
    /// Fetch a page by slug. Private pages require an authenticated actor;
    /// visibility is decided from the explicit `actor` parameter alone.
    pub async fn get_page_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetPageBySlugQuery,
    ) -> ApplicationResult<PageDto> {
        let slug = PageSlug::new(query.slug)?;
        let page = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        if page.is_private && actor.is_none() {
            return Err(ApplicationError::unauthorized("page is private"));
        }

        self.to_dto(page).await
    }
}
