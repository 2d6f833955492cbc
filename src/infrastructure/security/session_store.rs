use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::session_revocation::SessionRevocationStore,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::RwLock;

/// Process-local revocation set. Sessions die with the process anyway since
/// tokens carry a hard expiry, so a single-process deployment needs nothing
/// more durable.
#[derive(Default)]
pub struct InMemorySessionRevocationStore {
    revoked: RwLock<HashSet<String>>,
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        self.revoked
            .write()
            .map_err(|_| ApplicationError::infrastructure("revocation store lock poisoned"))?
            .insert(session_id.to_string());
        Ok(())
    }

    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        Ok(self
            .revoked
            .read()
            .map_err(|_| ApplicationError::infrastructure("revocation store lock poisoned"))?
            .contains(session_id))
    }
}
