use crate::domain::errors::DomainResult;
use crate::domain::site_option::entity::SiteOption;
use async_trait::async_trait;

#[async_trait]
pub trait SiteOptionRepository: Send + Sync {
    async fn get(&self, name: &str) -> DomainResult<Option<SiteOption>>;
    async fn upsert(&self, name: &str, value: &str) -> DomainResult<SiteOption>;
    async fn delete(&self, name: &str) -> DomainResult<()>;
    /// Options ordered by name, optionally filtered by a substring match.
    async fn list(&self, search: Option<&str>) -> DomainResult<Vec<SiteOption>>;
}
