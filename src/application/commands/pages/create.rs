// src/application/commands/pages/create.rs
use super::PageCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PageDto},
        error::ApplicationResult,
    },
    domain::{
        page::{NewPage, PageContent, PageTitle},
        tag::services::parse_tag_csv,
    },
};

pub struct CreatePageCommand {
    pub title: String,
    pub content: Option<String>,
    pub notes: Option<String>,
    pub is_private: bool,
    /// Comma-separated tag names; may be empty.
    pub tags: String,
}

impl PageCommandService {
    pub async fn create_page(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePageCommand,
    ) -> ApplicationResult<PageDto> {
        let title = PageTitle::new(command.title)?;
        let content = PageContent::from_optional(command.content);
        let requested = parse_tag_csv(&command.tags);

        // Validates the title and allocates the slug before anything is
        // written, so a rejected title leaves no partial state.
        let slug = self.slug_service.unique_slug(&title).await?;
        let now = self.clock.now();

        let new_page = NewPage::compose(
            title,
            slug,
            content,
            command.notes,
            command.is_private,
            now,
        );

        let page = self.write_repo.insert(new_page).await?;
        let tags = self.sync_tags(page.id, &requested).await?;

        tracing::info!(
            author = %actor.author,
            page_id = %page.id,
            slug = %page.slug,
            "page created"
        );
        Ok(PageDto::from_parts(page, tags))
    }
}
