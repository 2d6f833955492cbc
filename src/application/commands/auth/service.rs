// src/application/commands/auth/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
    },
    domain::site_option::SiteOptionRepository,
};

pub struct AuthCommandService {
    pub(super) option_repo: Arc<dyn SiteOptionRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) revocation_store: Arc<dyn SessionRevocationStore>,
    pub(super) default_author: String,
}

impl AuthCommandService {
    pub fn new(
        option_repo: Arc<dyn SiteOptionRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        revocation_store: Arc<dyn SessionRevocationStore>,
        default_author: String,
    ) -> Self {
        Self {
            option_repo,
            password_hasher,
            token_manager,
            revocation_store,
            default_author,
        }
    }
}
