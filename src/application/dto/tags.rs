use crate::domain::tag::Tag;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::pages::PageDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagWithPagesDto {
    pub id: i64,
    pub name: String,
    pub pages: Vec<PageDto>,
}
