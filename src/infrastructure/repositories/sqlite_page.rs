use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{
    NewPage, Page, PageContent, PageId, PageReadRepository, PageSlug, PageSummary, PageTitle,
    PageUpdate, PageWriteRepository,
};
use crate::domain::tag::TagId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::map_error;

const PAGE_COLUMNS: &str =
    "id, title, slug, content, summary, notes, is_private, created_at, updated_at";

#[derive(Clone)]
pub struct SqlitePageWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePageWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePageReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePageReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    summary: String,
    notes: Option<String>,
    is_private: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::new(row.id)?,
            title: PageTitle::new(row.title)?,
            slug: PageSlug::new(row.slug)?,
            content: PageContent::new(row.content),
            summary: PageSummary::new(row.summary),
            notes: row.notes,
            is_private: row.is_private != 0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PageWriteRepository for SqlitePageWriteRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let NewPage {
            title,
            slug,
            content,
            summary,
            notes,
            is_private,
            created_at,
            updated_at,
        } = page;

        let row = sqlx::query_as::<_, PageRow>(
            "INSERT INTO pages (title, slug, content, summary, notes, is_private, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, title, slug, content, summary, notes, is_private, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(summary.as_str())
        .bind(notes.as_deref())
        .bind(i64::from(is_private))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Page::try_from(row)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let PageUpdate {
            id,
            title,
            content,
            summary,
            notes,
            is_private,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, PageRow>(
            "UPDATE pages SET title = ?, content = ?, summary = ?, notes = ?, is_private = ?, updated_at = ? \
             WHERE id = ? \
             RETURNING id, title, slug, content, summary, notes, is_private, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(summary.as_str())
        .bind(notes.as_deref())
        .bind(i64::from(is_private))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?
        .ok_or_else(|| DomainError::NotFound(format!("page {} does not exist", i64::from(id))))?;

        Page::try_from(row)
    }

    async fn set_slug(&self, id: PageId, slug: &PageSlug) -> DomainResult<()> {
        self.set_column(id, "slug", slug.as_str()).await
    }

    async fn set_summary(&self, id: PageId, summary: &PageSummary) -> DomainResult<()> {
        self.set_column(id, "summary", summary.as_str()).await
    }

    async fn set_created_at(&self, id: PageId, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query("UPDATE pages SET created_at = ? WHERE id = ?")
            .bind(at)
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        ensure_row_touched(result.rows_affected(), id)
    }

    async fn set_updated_at(&self, id: PageId, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query("UPDATE pages SET updated_at = ? WHERE id = ?")
            .bind(at)
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        ensure_row_touched(result.rows_affected(), id)
    }
}

impl SqlitePageWriteRepository {
    async fn set_column(&self, id: PageId, column: &'static str, value: &str) -> DomainResult<()> {
        let query = format!("UPDATE pages SET {column} = ? WHERE id = ?");
        let result = sqlx::query(&query)
            .bind(value)
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        ensure_row_touched(result.rows_affected(), id)
    }
}

fn ensure_row_touched(rows_affected: u64, id: PageId) -> DomainResult<()> {
    if rows_affected == 0 {
        Err(DomainError::NotFound(format!(
            "page {} does not exist",
            i64::from(id)
        )))
    } else {
        Ok(())
    }
}

#[async_trait]
impl PageReadRepository for SqlitePageReadRepository {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_by_title(&self, title: &PageTitle) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE title = ?"
        ))
        .bind(title.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Page::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM pages WHERE slug = ?")
            .bind(slug)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_error)?;

        Ok(count > 0)
    }

    async fn list_paginated(
        &self,
        include_private: bool,
        page: u32,
        per_page: u32,
    ) -> DomainResult<(Vec<Page>, u64)> {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let offset = i64::from(page - 1) * i64::from(per_page);
        let visibility = if include_private {
            ""
        } else {
            " WHERE is_private = 0"
        };

        let rows = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages{visibility} ORDER BY title ASC LIMIT ? OFFSET ?"
        ))
        .bind(i64::from(per_page))
        .bind(offset)
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(1) FROM pages{visibility}"))
                .fetch_one(&*self.pool)
                .await
                .map_err(map_error)?;

        let pages = rows
            .into_iter()
            .map(Page::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((pages, total.max(0) as u64))
    }

    async fn list_by_tag(&self, tag_id: TagId, include_private: bool) -> DomainResult<Vec<Page>> {
        let visibility = if include_private {
            ""
        } else {
            " AND p.is_private = 0"
        };

        let rows = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT p.id, p.title, p.slug, p.content, p.summary, p.notes, p.is_private, \
             p.created_at, p.updated_at \
             FROM pages p \
             JOIN pages_tags pt ON pt.page_id = p.id \
             WHERE pt.tag_id = ?{visibility} \
             ORDER BY p.title ASC"
        ))
        .bind(i64::from(tag_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Page::try_from).collect()
    }
}
