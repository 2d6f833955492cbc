// src/application/queries/tags/list.rs
use super::TagQueryService;
use crate::application::{dto::TagDto, error::ApplicationResult};

impl TagQueryService {
    /// Every tag, orphaned ones included.
    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tag_repo.list_all().await?;
        Ok(tags.into_iter().map(TagDto::from).collect())
    }
}
