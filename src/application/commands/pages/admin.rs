// src/application/commands/pages/admin.rs
//
// Operator-facing maintenance operations, driven from the CLI rather than
// the HTTP API. Each reports the old and new value so the operator can see
// what changed.
use super::PageCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::page::{Page, PageId, PageSummary},
};
use chrono::{DateTime, Utc};

pub struct ResetSlugCommand {
    pub page_id: i64,
}

#[derive(Debug, Clone)]
pub struct SlugResetOutcome {
    pub page_id: i64,
    pub old_slug: String,
    pub new_slug: String,
}

pub struct ResetSummaryCommand {
    pub page_id: i64,
}

#[derive(Debug, Clone)]
pub struct SummaryResetOutcome {
    pub page_id: i64,
    pub old_summary: String,
    pub new_summary: String,
}

pub struct SetCreatedDateCommand {
    pub page_id: i64,
    pub at: DateTime<Utc>,
}

pub struct SetUpdatedDateCommand {
    pub page_id: i64,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DateChangeOutcome {
    pub page_id: i64,
    pub old_date: DateTime<Utc>,
    pub new_date: DateTime<Utc>,
}

impl PageCommandService {
    async fn require_page(&self, page_id: i64) -> ApplicationResult<Page> {
        let id = PageId::new(page_id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("no page found with id {page_id}")))
    }

    /// The only operation that regenerates a slug after it was first
    /// assigned. Recomputes from the current title through the regular
    /// unique-slug search.
    pub async fn reset_slug(&self, command: ResetSlugCommand) -> ApplicationResult<SlugResetOutcome> {
        let page = self.require_page(command.page_id).await?;
        let new_slug = self.slug_service.unique_slug(&page.title).await?;
        self.write_repo.set_slug(page.id, &new_slug).await?;

        tracing::info!(page_id = %page.id, old = %page.slug, new = %new_slug, "slug reset");
        Ok(SlugResetOutcome {
            page_id: command.page_id,
            old_slug: page.slug.into(),
            new_slug: new_slug.into(),
        })
    }

    /// Re-derive the summary from the stored content, equivalent to writing
    /// the content back to itself.
    pub async fn reset_summary(
        &self,
        command: ResetSummaryCommand,
    ) -> ApplicationResult<SummaryResetOutcome> {
        let page = self.require_page(command.page_id).await?;
        let new_summary = PageSummary::derive(&page.content);
        self.write_repo.set_summary(page.id, &new_summary).await?;

        Ok(SummaryResetOutcome {
            page_id: command.page_id,
            old_summary: page.summary.into(),
            new_summary: new_summary.into(),
        })
    }

    pub async fn set_created_date(
        &self,
        command: SetCreatedDateCommand,
    ) -> ApplicationResult<DateChangeOutcome> {
        let page = self.require_page(command.page_id).await?;
        self.write_repo.set_created_at(page.id, command.at).await?;

        Ok(DateChangeOutcome {
            page_id: command.page_id,
            old_date: page.created_at,
            new_date: command.at,
        })
    }

    pub async fn set_updated_date(
        &self,
        command: SetUpdatedDateCommand,
    ) -> ApplicationResult<DateChangeOutcome> {
        let page = self.require_page(command.page_id).await?;
        self.write_repo.set_updated_at(page.id, command.at).await?;

        Ok(DateChangeOutcome {
            page_id: command.page_id,
            old_date: page.updated_at,
            new_date: command.at,
        })
    }
}
