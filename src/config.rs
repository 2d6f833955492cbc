// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    session_key: String,
    token_ttl: Duration,
    sitename: String,
    author: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://quire.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:2512".into()
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_sitename() -> String {
    "Site Name".into()
}

fn default_author() -> String {
    "The Author".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = Self::database_url_from_env();
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let session_key =
            env::var("SESSION_KEY").map_err(|_| ConfigError::Missing("SESSION_KEY"))?;

        if session_key.len() < 32 {
            return Err(ConfigError::Invalid(
                "SESSION_KEY must be at least 32 characters".into(),
            ));
        }

        let token_ttl_secs = env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(default_token_ttl);

        Ok(Self {
            database_url,
            listen_addr,
            session_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            sitename: Self::sitename_from_env(),
            author: Self::author_from_env(),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn sitename(&self) -> &str {
        &self.sitename
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Helpers for the admin CLI, which needs the database and site
    /// identity but none of the web-serving configuration.
    pub fn database_url_from_env() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url())
    }

    pub fn sitename_from_env() -> String {
        env::var("SITE_NAME").unwrap_or_else(|_| default_sitename())
    }

    pub fn author_from_env() -> String {
        env::var("AUTHOR").unwrap_or_else(|_| default_author())
    }
}
