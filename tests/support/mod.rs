// tests/support/mod.rs
//
// In-memory repositories backing the service-level tests. One shared store
// implements every repository trait so page/tag associations stay
// consistent across the seams.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use quire_core::application::dto::AuthenticatedUser;
use quire_core::application::ports::security::{PasswordHasher, TokenManager};
use quire_core::application::ports::session_revocation::SessionRevocationStore;
use quire_core::application::ports::time::Clock;
use quire_core::application::ports::util::SlugGenerator;
use quire_core::application::queries::site_options::SiteDefaults;
use quire_core::application::services::ApplicationServices;
use quire_core::domain::errors::{DomainError, DomainResult};
use quire_core::domain::page::{
    NewPage, Page, PageId, PageReadRepository, PageSlug, PageSummary, PageTitle, PageUpdate,
    PageWriteRepository,
};
use quire_core::domain::site_option::{SiteOption, SiteOptionRepository};
use quire_core::domain::tag::{NewTag, Tag, TagId, TagName, TagRepository};
use quire_core::infrastructure::security::{
    Argon2PasswordHasher, HmacTokenManager, InMemorySessionRevocationStore,
};
use quire_core::infrastructure::util::DefaultSlugGenerator;

#[derive(Default)]
struct Inner {
    pages: Mutex<Vec<Page>>,
    next_page_id: Mutex<i64>,
    tags: Mutex<Vec<Tag>>,
    next_tag_id: Mutex<i64>,
    links: Mutex<HashSet<(i64, i64)>>, // (page_id, tag_id)
    options: Mutex<BTreeMap<String, Option<String>>>,
}

#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Inner>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_count(&self) -> usize {
        self.inner.pages.lock().unwrap().len()
    }

    pub fn tag_count(&self) -> usize {
        self.inner.tags.lock().unwrap().len()
    }

    pub fn set_option_raw(&self, name: &str, value: &str) {
        self.inner
            .options
            .lock()
            .unwrap()
            .insert(name.to_string(), Some(value.to_string()));
    }
}

#[async_trait]
impl PageWriteRepository for MemoryDb {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let mut next_id = self.inner.next_page_id.lock().unwrap();
        *next_id += 1;
        let stored = Page {
            id: PageId::new(*next_id)?,
            title: page.title,
            slug: page.slug,
            content: page.content,
            summary: page.summary,
            notes: page.notes,
            is_private: page.is_private,
            created_at: page.created_at,
            updated_at: page.updated_at,
        };
        self.inner.pages.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let mut pages = self.inner.pages.lock().unwrap();
        let page = pages
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("page does not exist".into()))?;
        page.title = update.title;
        page.content = update.content;
        page.summary = update.summary;
        page.notes = update.notes;
        page.is_private = update.is_private;
        page.updated_at = update.updated_at;
        Ok(page.clone())
    }

    async fn set_slug(&self, id: PageId, slug: &PageSlug) -> DomainResult<()> {
        let mut pages = self.inner.pages.lock().unwrap();
        let page = pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound("page does not exist".into()))?;
        page.set_slug(slug.clone());
        Ok(())
    }

    async fn set_summary(&self, id: PageId, summary: &PageSummary) -> DomainResult<()> {
        let mut pages = self.inner.pages.lock().unwrap();
        let page = pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound("page does not exist".into()))?;
        page.summary = summary.clone();
        Ok(())
    }

    async fn set_created_at(&self, id: PageId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut pages = self.inner.pages.lock().unwrap();
        let page = pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound("page does not exist".into()))?;
        page.created_at = at;
        Ok(())
    }

    async fn set_updated_at(&self, id: PageId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut pages = self.inner.pages.lock().unwrap();
        let page = pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound("page does not exist".into()))?;
        page.updated_at = at;
        Ok(())
    }
}

#[async_trait]
impl PageReadRepository for MemoryDb {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        Ok(self
            .inner
            .pages
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>> {
        Ok(self
            .inner
            .pages
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == *slug)
            .cloned())
    }

    async fn find_by_title(&self, title: &PageTitle) -> DomainResult<Option<Page>> {
        Ok(self
            .inner
            .pages
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.title == *title)
            .cloned())
    }

    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        Ok(self
            .inner
            .pages
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.slug.as_str() == slug))
    }

    async fn list_paginated(
        &self,
        include_private: bool,
        page: u32,
        per_page: u32,
    ) -> DomainResult<(Vec<Page>, u64)> {
        let mut visible: Vec<Page> = self
            .inner
            .pages
            .lock()
            .unwrap()
            .iter()
            .filter(|p| include_private || !p.is_private)
            .cloned()
            .collect();
        visible.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));

        let total = visible.len() as u64;
        let start = ((page.max(1) - 1) as usize) * per_page as usize;
        let items = visible
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect();
        Ok((items, total))
    }

    async fn list_by_tag(&self, tag_id: TagId, include_private: bool) -> DomainResult<Vec<Page>> {
        let links = self.inner.links.lock().unwrap();
        let mut pages: Vec<Page> = self
            .inner
            .pages
            .lock()
            .unwrap()
            .iter()
            .filter(|p| links.contains(&(i64::from(p.id), i64::from(tag_id))))
            .filter(|p| include_private || !p.is_private)
            .cloned()
            .collect();
        pages.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(pages)
    }
}

#[async_trait]
impl TagRepository for MemoryDb {
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        Ok(self
            .inner
            .tags
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        Ok(self
            .inner
            .tags
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.name == *name)
            .cloned())
    }

    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut next_id = self.inner.next_tag_id.lock().unwrap();
        *next_id += 1;
        let stored = Tag {
            id: TagId::new(*next_id)?,
            name: tag.name,
        };
        self.inner.tags.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let mut tags = self.inner.tags.lock().unwrap().clone();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(tags)
    }

    async fn tags_for_page(&self, page_id: PageId) -> DomainResult<Vec<Tag>> {
        let links = self.inner.links.lock().unwrap();
        let mut tags: Vec<Tag> = self
            .inner
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|t| links.contains(&(i64::from(page_id), i64::from(t.id))))
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(tags)
    }

    async fn attach(&self, page_id: PageId, tag_id: TagId) -> DomainResult<()> {
        self.inner
            .links
            .lock()
            .unwrap()
            .insert((i64::from(page_id), i64::from(tag_id)));
        Ok(())
    }

    async fn detach(&self, page_id: PageId, tag_id: TagId) -> DomainResult<()> {
        self.inner
            .links
            .lock()
            .unwrap()
            .remove(&(i64::from(page_id), i64::from(tag_id)));
        Ok(())
    }
}

#[async_trait]
impl SiteOptionRepository for MemoryDb {
    async fn get(&self, name: &str) -> DomainResult<Option<SiteOption>> {
        Ok(self
            .inner
            .options
            .lock()
            .unwrap()
            .get(name)
            .map(|value| SiteOption {
                name: name.to_string(),
                value: value.clone(),
            }))
    }

    async fn upsert(&self, name: &str, value: &str) -> DomainResult<SiteOption> {
        self.inner
            .options
            .lock()
            .unwrap()
            .insert(name.to_string(), Some(value.to_string()));
        Ok(SiteOption {
            name: name.to_string(),
            value: Some(value.to_string()),
        })
    }

    async fn delete(&self, name: &str) -> DomainResult<()> {
        self.inner.options.lock().unwrap().remove(name);
        Ok(())
    }

    async fn list(&self, search: Option<&str>) -> DomainResult<Vec<SiteOption>> {
        Ok(self
            .inner
            .options
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| search.is_none_or(|term| name.contains(term)))
            .map(|(name, value)| SiteOption {
                name: name.clone(),
                value: value.clone(),
            })
            .collect())
    }
}

#[derive(Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub const TEST_SESSION_KEY: &str = "0123456789abcdef0123456789abcdef";

pub fn build_services(db: &MemoryDb, now: DateTime<Utc>) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(now));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(
        HmacTokenManager::new(TEST_SESSION_KEY, Duration::from_secs(3600), Arc::clone(&clock))
            .expect("token manager"),
    );
    let revocation_store: Arc<dyn SessionRevocationStore> =
        Arc::new(InMemorySessionRevocationStore::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(
        Arc::new(db.clone()),
        Arc::new(db.clone()),
        Arc::new(db.clone()),
        Arc::new(db.clone()),
        password_hasher,
        token_manager,
        revocation_store,
        clock,
        slugger,
        SiteDefaults {
            sitename: "Test Site".into(),
            author: "Test Author".into(),
        },
    ))
}

pub fn authed_user(now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        author: "Test Author".into(),
        session_id: "test-session".into(),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}
