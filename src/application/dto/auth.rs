use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
    pub session_id: String,
}

/// The authenticated single author, reconstructed from a verified token.
/// Queries take this as an explicit `Option` parameter; visibility of
/// private pages is never read from ambient state.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub author: String,
    pub session_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub author: String,
    pub session_id: String,
}
