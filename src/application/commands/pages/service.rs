// src/application/commands/pages/service.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::time::Clock},
    domain::{
        page::{PageId, PageReadRepository, PageWriteRepository, services::PageSlugService},
        tag::{NewTag, Tag, TagName, TagRepository, services::reconcile},
    },
};

pub struct PageCommandService {
    pub(super) write_repo: Arc<dyn PageWriteRepository>,
    pub(super) read_repo: Arc<dyn PageReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<PageSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PageCommandService {
    pub fn new(
        write_repo: Arc<dyn PageWriteRepository>,
        read_repo: Arc<dyn PageReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slug_service: Arc<PageSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            tag_repo,
            slug_service,
            clock,
        }
    }

    /// Bring the page's tag associations in line with the requested name
    /// set. Missing tags are created lazily; detached tags are never
    /// deleted. Returns the page's resulting tag set.
    pub(super) async fn sync_tags(
        &self,
        page_id: PageId,
        requested: &BTreeSet<TagName>,
    ) -> ApplicationResult<Vec<Tag>> {
        let current = self.tag_repo.tags_for_page(page_id).await?;
        let plan = reconcile(&current, requested);

        for tag in &plan.to_remove {
            self.tag_repo.detach(page_id, tag.id).await?;
        }

        for name in &plan.to_add {
            let tag = match self.tag_repo.find_by_name(name).await? {
                Some(existing) => existing,
                None => self.tag_repo.insert(NewTag { name: name.clone() }).await?,
            };
            self.tag_repo.attach(page_id, tag.id).await?;
        }

        Ok(self.tag_repo.tags_for_page(page_id).await?)
    }
}
