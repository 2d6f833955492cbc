// src/application/commands/auth/logout.rs
use super::AuthCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl AuthCommandService {
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        self.revocation_store.revoke(&actor.session_id).await?;
        tracing::info!(session_id = %actor.session_id, "session revoked");
        Ok(())
    }
}
