// src/application/commands/pages/update.rs
use super::PageCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        page::{PageContent, PageId, PageTitle, PageUpdate},
        tag::services::parse_tag_csv,
    },
};

/// Full-state edit, mirroring the edit form: every field is submitted on
/// every save. The slug is never part of an edit.
pub struct UpdatePageCommand {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub notes: Option<String>,
    pub is_private: bool,
    pub tags: String,
}

impl PageCommandService {
    pub async fn update_page(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePageCommand,
    ) -> ApplicationResult<PageDto> {
        let id = PageId::new(command.id)?;
        let mut page = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let title = PageTitle::new(command.title)?;
        // Reject titles that slugify to nothing before any mutation.
        self.slug_service.ensure_sluggable(&title)?;
        let requested = parse_tag_csv(&command.tags);

        let now = self.clock.now();
        page.rename(title, now);
        page.set_content(PageContent::from_optional(command.content), now);
        page.set_notes(command.notes, now);
        page.set_privacy(command.is_private, now);

        let updated = self.write_repo.update(PageUpdate::from_page(&page)).await?;
        let tags = self.sync_tags(updated.id, &requested).await?;

        tracing::info!(
            author = %actor.author,
            page_id = %updated.id,
            slug = %updated.slug,
            "page updated"
        );
        Ok(PageDto::from_parts(updated, tags))
    }
}
