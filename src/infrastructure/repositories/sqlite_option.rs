use crate::domain::errors::DomainResult;
use crate::domain::site_option::{SiteOption, SiteOptionRepository};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::map_error;

#[derive(Clone)]
pub struct SqliteSiteOptionRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSiteOptionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OptionRow {
    name: String,
    value: Option<String>,
}

impl From<OptionRow> for SiteOption {
    fn from(row: OptionRow) -> Self {
        Self {
            name: row.name,
            value: row.value,
        }
    }
}

#[async_trait]
impl SiteOptionRepository for SqliteSiteOptionRepository {
    async fn get(&self, name: &str) -> DomainResult<Option<SiteOption>> {
        let row = sqlx::query_as::<_, OptionRow>("SELECT name, value FROM options WHERE name = ?")
            .bind(name)
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_error)?;

        Ok(row.map(SiteOption::from))
    }

    async fn upsert(&self, name: &str, value: &str) -> DomainResult<SiteOption> {
        let row = sqlx::query_as::<_, OptionRow>(
            "INSERT INTO options (name, value) VALUES (?, ?) \
             ON CONFLICT (name) DO UPDATE SET value = excluded.value \
             RETURNING name, value",
        )
        .bind(name)
        .bind(value)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(SiteOption::from(row))
    }

    async fn delete(&self, name: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM options WHERE name = ?")
            .bind(name)
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }

    async fn list(&self, search: Option<&str>) -> DomainResult<Vec<SiteOption>> {
        let rows = match search.map(str::trim).filter(|term| !term.is_empty()) {
            Some(term) => {
                sqlx::query_as::<_, OptionRow>(
                    "SELECT name, value FROM options WHERE name LIKE ? ORDER BY name ASC",
                )
                .bind(format!("%{term}%"))
                .fetch_all(&*self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, OptionRow>("SELECT name, value FROM options ORDER BY name ASC")
                    .fetch_all(&*self.pool)
                    .await
            }
        }
        .map_err(map_error)?;

        Ok(rows.into_iter().map(SiteOption::from).collect())
    }
}
