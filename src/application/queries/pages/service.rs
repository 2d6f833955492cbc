// src/application/queries/pages/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::{
        page::{Page, PageReadRepository},
        site_option::SiteOptionRepository,
        tag::TagRepository,
    },
};

pub struct PageQueryService {
    pub(super) read_repo: Arc<dyn PageReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) option_repo: Arc<dyn SiteOptionRepository>,
}

impl PageQueryService {
    pub fn new(
        read_repo: Arc<dyn PageReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        option_repo: Arc<dyn SiteOptionRepository>,
    ) -> Self {
        Self {
            read_repo,
            tag_repo,
            option_repo,
        }
    }

    pub(super) async fn to_dto(&self, page: Page) -> ApplicationResult<PageDto> {
        let tags = self.tag_repo.tags_for_page(page.id).await?;
        Ok(PageDto::from_parts(page, tags))
    }
}
