// src/domain/page/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::repository::PageReadRepository;
use crate::domain::page::value_objects::{PageSlug, PageTitle};

/// Domain service responsible for producing unique slugs for pages.
pub struct PageSlugService {
    read_repo: Arc<dyn PageReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PageSlugService {
    pub fn new(read_repo: Arc<dyn PageReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Reject titles that normalize to an empty slug. Callers run this before
    /// applying any mutation, so a bad title never leaves partial state.
    pub fn ensure_sluggable(&self, title: &PageTitle) -> DomainResult<()> {
        if self.generator.slugify(title.as_str()).is_empty() {
            return Err(DomainError::Validation(format!(
                "title {:?} does not produce a usable slug",
                title.as_str()
            )));
        }
        Ok(())
    }

    /// Produce a slug no existing page holds. On collision the ascending
    /// counter is appended to the original title, not the slug, and the
    /// candidate is re-slugified: "title" -> "title-1" -> "title-2".
    ///
    /// The search is sequential and unbounded; each counter value yields a
    /// distinct candidate for any title that survives slugification.
    pub async fn unique_slug(&self, title: &PageTitle) -> DomainResult<PageSlug> {
        self.ensure_sluggable(title)?;

        let mut candidate = self.generator.slugify(title.as_str());
        let mut counter = 1u64;

        while self.read_repo.slug_exists(&candidate).await? {
            candidate = self
                .generator
                .slugify(&format!("{} {}", title.as_str(), counter));
            counter += 1;
        }

        PageSlug::new(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainResult;
    use crate::domain::page::entity::Page;
    use crate::domain::page::value_objects::PageId;
    use crate::domain::tag::TagId;
    use crate::infrastructure::util::DefaultSlugGenerator;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct FixedSlugStore {
        slugs: Mutex<HashSet<String>>,
    }

    impl FixedSlugStore {
        fn with(slugs: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                slugs: Mutex::new(slugs.iter().map(|s| (*s).to_string()).collect()),
            })
        }
    }

    #[async_trait]
    impl PageReadRepository for FixedSlugStore {
        async fn find_by_id(&self, _id: PageId) -> DomainResult<Option<Page>> {
            Ok(None)
        }

        async fn find_by_slug(&self, _slug: &PageSlug) -> DomainResult<Option<Page>> {
            Ok(None)
        }

        async fn find_by_title(&self, _title: &PageTitle) -> DomainResult<Option<Page>> {
            Ok(None)
        }

        async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
            Ok(self.slugs.lock().expect("store lock").contains(slug))
        }

        async fn list_paginated(
            &self,
            _include_private: bool,
            _page: u32,
            _per_page: u32,
        ) -> DomainResult<(Vec<Page>, u64)> {
            Ok((vec![], 0))
        }

        async fn list_by_tag(
            &self,
            _tag_id: TagId,
            _include_private: bool,
        ) -> DomainResult<Vec<Page>> {
            Ok(vec![])
        }
    }

    fn service(store: Arc<FixedSlugStore>) -> PageSlugService {
        PageSlugService::new(store, Arc::new(DefaultSlugGenerator))
    }

    #[tokio::test]
    async fn slug_is_lowercased() {
        let svc = service(FixedSlugStore::with(&[]));
        let title = PageTitle::new("TITLEtitletItLe").unwrap();
        let slug = svc.unique_slug(&title).await.unwrap();
        assert_eq!(slug.as_str(), "titletitletitle");
    }

    #[test]
    fn non_word_characters_are_stripped() {
        let generator = DefaultSlugGenerator;
        use crate::application::ports::util::SlugGenerator as _;
        assert_eq!(generator.slugify("title ! $,()"), "title");
    }

    #[tokio::test]
    async fn collision_appends_counter_to_title() {
        let svc = service(FixedSlugStore::with(&["title"]));
        let title = PageTitle::new("title").unwrap();
        let slug = svc.unique_slug(&title).await.unwrap();
        assert_eq!(slug.as_str(), "title-1");
    }

    #[tokio::test]
    async fn counter_keeps_climbing_until_free() {
        let svc = service(FixedSlugStore::with(&["title", "title-1", "title-2"]));
        let title = PageTitle::new("title").unwrap();
        let slug = svc.unique_slug(&title).await.unwrap();
        assert_eq!(slug.as_str(), "title-3");
    }

    #[tokio::test]
    async fn second_call_never_reuses_the_first_result() {
        let store = FixedSlugStore::with(&[]);
        let svc = service(Arc::clone(&store));
        let title = PageTitle::new("repeat me").unwrap();

        let first = svc.unique_slug(&title).await.unwrap();
        store
            .slugs
            .lock()
            .expect("store lock")
            .insert(first.as_str().to_string());

        let second = svc.unique_slug(&title).await.unwrap();
        assert_ne!(first.as_str(), second.as_str());
        assert_eq!(second.as_str(), "repeat-me-1");
    }

    #[tokio::test]
    async fn unsluggable_title_is_rejected() {
        let svc = service(FixedSlugStore::with(&[]));
        let title = PageTitle::new("!!!").unwrap();
        assert!(svc.unique_slug(&title).await.is_err());
    }
}
