// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            auth::AuthCommandService, pages::PageCommandService,
            site_options::SiteOptionCommandService,
        },
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::{
            security::{PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            pages::PageQueryService,
            site_options::{SiteDefaults, SiteOptionQueryService},
            tags::TagQueryService,
        },
    },
    domain::{
        page::{PageReadRepository, PageWriteRepository, services::PageSlugService},
        site_option::SiteOptionRepository,
        tag::TagRepository,
    },
};

pub struct ApplicationServices {
    pub page_commands: Arc<PageCommandService>,
    pub auth_commands: Arc<AuthCommandService>,
    pub option_commands: Arc<SiteOptionCommandService>,
    pub page_queries: Arc<PageQueryService>,
    pub tag_queries: Arc<TagQueryService>,
    pub option_queries: Arc<SiteOptionQueryService>,
    token_manager: Arc<dyn TokenManager>,
    revocation_store: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        page_write_repo: Arc<dyn PageWriteRepository>,
        page_read_repo: Arc<dyn PageReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        option_repo: Arc<dyn SiteOptionRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        revocation_store: Arc<dyn SessionRevocationStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        defaults: SiteDefaults,
    ) -> Self {
        let slug_service = Arc::new(PageSlugService::new(
            Arc::clone(&page_read_repo),
            Arc::clone(&slugger),
        ));

        let page_commands = Arc::new(PageCommandService::new(
            Arc::clone(&page_write_repo),
            Arc::clone(&page_read_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let auth_commands = Arc::new(AuthCommandService::new(
            Arc::clone(&option_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&revocation_store),
            defaults.author.clone(),
        ));

        let option_commands = Arc::new(SiteOptionCommandService::new(Arc::clone(&option_repo)));

        let page_queries = Arc::new(PageQueryService::new(
            Arc::clone(&page_read_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&option_repo),
        ));

        let tag_queries = Arc::new(TagQueryService::new(
            Arc::clone(&tag_repo),
            Arc::clone(&page_read_repo),
        ));

        let option_queries = Arc::new(SiteOptionQueryService::new(
            Arc::clone(&option_repo),
            defaults,
        ));

        Self {
            page_commands,
            auth_commands,
            option_commands,
            page_queries,
            tag_queries,
            option_queries,
            token_manager,
            revocation_store,
        }
    }

    /// Verify a bearer token and reject revoked sessions. The presentation
    /// layer's extractors delegate here instead of reimplementing the
    /// checks.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;

        if self.revocation_store.is_revoked(&user.session_id).await? {
            return Err(ApplicationError::unauthorized("session revoked"));
        }

        Ok(user)
    }
}
