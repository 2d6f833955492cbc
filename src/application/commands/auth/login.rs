// src/application/commands/auth/login.rs
use super::AuthCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::site_option::SiteOption,
};
use uuid::Uuid;

pub struct LoginCommand {
    pub password: String,
}

impl AuthCommandService {
    /// Single-author login: the site password's hash lives in the options
    /// table. A missing or empty hash means the site has no password yet
    /// and login is unavailable until the operator sets one.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AuthTokenDto> {
        let stored_hash = self
            .option_repo
            .get(SiteOption::HASHED_PASSWORD)
            .await?
            .and_then(|option| option.value)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApplicationError::unavailable("no password set"))?;

        self.password_hasher
            .verify(&command.password, &stored_hash)
            .await?;

        let author = self
            .option_repo
            .get(SiteOption::AUTHOR)
            .await?
            .and_then(|option| option.value)
            .unwrap_or_else(|| self.default_author.clone());

        let session_id = Uuid::new_v4().to_string();
        let token = self
            .token_manager
            .issue(TokenSubject { author, session_id })
            .await?;

        tracing::info!(session_id = %token.session_id, "author logged in");
        Ok(token)
    }
}
