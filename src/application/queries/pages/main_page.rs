// src/application/queries/pages/main_page.rs
use super::PageQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        page::{Page, PageSlug, PageTitle},
        site_option::SiteOption,
    },
};

impl PageQueryService {
    /// Resolve the site's main page from the `main_page` option: looked up
    /// by title first, then by slug. A private main page is hidden from
    /// anonymous visitors as if unset.
    pub async fn main_page(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<PageDto> {
        let name = self
            .option_repo
            .get(SiteOption::MAIN_PAGE)
            .await?
            .and_then(|option| option.value)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApplicationError::not_found("no main page configured"))?;

        let page = self
            .resolve_main_page(&name)
            .await?
            .filter(|page| !page.is_private || actor.is_some())
            .ok_or_else(|| ApplicationError::not_found("main page not found"))?;

        self.to_dto(page).await
    }

    async fn resolve_main_page(&self, name: &str) -> ApplicationResult<Option<Page>> {
        if let Ok(title) = PageTitle::new(name) {
            if let Some(page) = self.read_repo.find_by_title(&title).await? {
                return Ok(Some(page));
            }
        }

        if let Ok(slug) = PageSlug::new(name) {
            return Ok(self.read_repo.find_by_slug(&slug).await?);
        }

        Ok(None)
    }
}
