// src/application/queries/tags/service.rs
use std::sync::Arc;

use crate::domain::{page::PageReadRepository, tag::TagRepository};

pub struct TagQueryService {
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) page_repo: Arc<dyn PageReadRepository>,
}

impl TagQueryService {
    pub fn new(tag_repo: Arc<dyn TagRepository>, page_repo: Arc<dyn PageReadRepository>) -> Self {
        Self { tag_repo, page_repo }
    }
}
