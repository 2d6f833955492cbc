use crate::domain::site_option::SiteOption;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteOptionDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl From<SiteOption> for SiteOptionDto {
    fn from(option: SiteOption) -> Self {
        Self {
            name: option.name,
            value: option.value,
        }
    }
}
