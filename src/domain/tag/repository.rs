use crate::domain::errors::DomainResult;
use crate::domain::page::PageId;
use crate::domain::tag::entity::{NewTag, Tag};
use crate::domain::tag::value_objects::{TagId, TagName};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>>;
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    /// All tags, ordered by name. Orphaned tags are included: a tag is never
    /// deleted when its last page detaches it.
    async fn list_all(&self) -> DomainResult<Vec<Tag>>;
    async fn tags_for_page(&self, page_id: PageId) -> DomainResult<Vec<Tag>>;
    async fn attach(&self, page_id: PageId, tag_id: TagId) -> DomainResult<()>;
    async fn detach(&self, page_id: PageId, tag_id: TagId) -> DomainResult<()>;
}
