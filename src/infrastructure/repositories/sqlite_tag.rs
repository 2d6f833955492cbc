use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::PageId;
use crate::domain::tag::{NewTag, Tag, TagId, TagName, TagRepository};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::map_error;

#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTagRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
        })
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags WHERE id = ?")
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_error)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags WHERE name = ?")
            .bind(name.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_error)?;

        row.map(Tag::try_from).transpose()
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name) VALUES (?) RETURNING id, name",
        )
        .bind(tag.name.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Tag::try_from(row)
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags ORDER BY name ASC")
            .fetch_all(&*self.pool)
            .await
            .map_err(map_error)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn tags_for_page(&self, page_id: PageId) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT t.id, t.name FROM tags t \
             JOIN pages_tags pt ON pt.tag_id = t.id \
             WHERE pt.page_id = ? \
             ORDER BY t.name ASC",
        )
        .bind(i64::from(page_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn attach(&self, page_id: PageId, tag_id: TagId) -> DomainResult<()> {
        sqlx::query("INSERT OR IGNORE INTO pages_tags (tag_id, page_id) VALUES (?, ?)")
            .bind(i64::from(tag_id))
            .bind(i64::from(page_id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }

    async fn detach(&self, page_id: PageId, tag_id: TagId) -> DomainResult<()> {
        sqlx::query("DELETE FROM pages_tags WHERE tag_id = ? AND page_id = ?")
            .bind(i64::from(tag_id))
            .bind(i64::from(page_id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }
}
