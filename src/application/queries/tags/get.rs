// src/application/queries/tags/get.rs
use super::TagQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PageDto, TagWithPagesDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::tag::TagId,
};

pub struct GetTagQuery {
    pub id: i64,
}

impl TagQueryService {
    /// A tag together with the pages carrying it; private pages are listed
    /// only for an authenticated actor.
    pub async fn get_tag(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetTagQuery,
    ) -> ApplicationResult<TagWithPagesDto> {
        let id = TagId::new(query.id)?;
        let tag = self
            .tag_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let include_private = actor.is_some();
        let pages = self.page_repo.list_by_tag(id, include_private).await?;

        let mut page_dtos = Vec::with_capacity(pages.len());
        for page in pages {
            let tags = self.tag_repo.tags_for_page(page.id).await?;
            page_dtos.push(PageDto::from_parts(page, tags));
        }

        Ok(TagWithPagesDto {
            id: tag.id.into(),
            name: tag.name.into(),
            pages: page_dtos,
        })
    }
}
