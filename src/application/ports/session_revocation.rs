// src/application/ports/session_revocation.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Logout support: revoked session ids are rejected on authentication even
/// while the signed token itself is still within its validity window.
#[async_trait]
pub trait SessionRevocationStore: Send + Sync {
    async fn revoke(&self, session_id: &str) -> ApplicationResult<()>;
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool>;
}
