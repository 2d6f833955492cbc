use crate::domain::page::Page;
use crate::domain::tag::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::tags::TagDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub is_private: bool,
    pub tags: Vec<TagDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageDto {
    pub fn from_parts(page: Page, tags: Vec<Tag>) -> Self {
        Self {
            id: page.id.into(),
            title: page.title.into(),
            slug: page.slug.into(),
            content: page.content.into(),
            summary: page.summary.into(),
            notes: page.notes,
            is_private: page.is_private,
            tags: tags.into_iter().map(TagDto::from).collect(),
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}
