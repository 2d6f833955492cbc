// src/application/queries/site_options/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::SiteOptionDto, error::ApplicationResult},
    domain::site_option::{SiteOption, SiteOptionRepository},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Config-supplied fallbacks for options the operator has not set.
#[derive(Debug, Clone)]
pub struct SiteDefaults {
    pub sitename: String,
    pub author: String,
}

pub struct ListOptionsQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteInfoDto {
    pub sitename: String,
    pub author: String,
}

pub struct SiteOptionQueryService {
    option_repo: Arc<dyn SiteOptionRepository>,
    defaults: SiteDefaults,
}

impl SiteOptionQueryService {
    pub fn new(option_repo: Arc<dyn SiteOptionRepository>, defaults: SiteDefaults) -> Self {
        Self {
            option_repo,
            defaults,
        }
    }

    pub async fn list_options(
        &self,
        query: ListOptionsQuery,
    ) -> ApplicationResult<Vec<SiteOptionDto>> {
        let options = self.option_repo.list(query.search.as_deref()).await?;
        Ok(options.into_iter().map(SiteOptionDto::from).collect())
    }

    async fn value_or(&self, name: &str, default: &str) -> ApplicationResult<String> {
        Ok(self
            .option_repo
            .get(name)
            .await?
            .and_then(|option| option.value)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string()))
    }

    /// Site identity as shown to visitors: options first, config defaults
    /// second.
    pub async fn site_info(&self) -> ApplicationResult<SiteInfoDto> {
        let sitename = self
            .value_or(SiteOption::SITENAME, &self.defaults.sitename)
            .await?;
        let author = self
            .value_or(SiteOption::AUTHOR, &self.defaults.author)
            .await?;
        Ok(SiteInfoDto { sitename, author })
    }
}
