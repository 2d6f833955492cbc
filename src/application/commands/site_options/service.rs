// src/application/commands/site_options/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::site_option::SiteOptionRepository,
};

pub struct SiteOptionCommandService {
    option_repo: Arc<dyn SiteOptionRepository>,
}

pub struct SetOptionCommand {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct OptionChangeOutcome {
    pub name: String,
    pub old_value: Option<String>,
    pub new_value: String,
}

pub struct ClearOptionCommand {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ClearedOptionOutcome {
    pub name: String,
    pub old_value: Option<String>,
}

impl SiteOptionCommandService {
    pub fn new(option_repo: Arc<dyn SiteOptionRepository>) -> Self {
        Self { option_repo }
    }

    pub async fn set_option(
        &self,
        command: SetOptionCommand,
    ) -> ApplicationResult<OptionChangeOutcome> {
        let old_value = self
            .option_repo
            .get(&command.name)
            .await?
            .and_then(|option| option.value);

        let stored = self
            .option_repo
            .upsert(&command.name, &command.value)
            .await?;

        tracing::info!(name = %stored.name, "option set");
        Ok(OptionChangeOutcome {
            name: stored.name,
            old_value,
            new_value: command.value,
        })
    }

    pub async fn clear_option(
        &self,
        command: ClearOptionCommand,
    ) -> ApplicationResult<ClearedOptionOutcome> {
        let existing = self.option_repo.get(&command.name).await?.ok_or_else(|| {
            ApplicationError::not_found(format!("no option found with name {}", command.name))
        })?;

        self.option_repo.delete(&command.name).await?;

        tracing::info!(name = %command.name, "option cleared");
        Ok(ClearedOptionOutcome {
            name: command.name,
            old_value: existing.value,
        })
    }
}
