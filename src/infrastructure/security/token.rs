use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, TimeZone, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    author: String,
    session_id: String,
    iat: i64,
    exp: i64,
}

/// Stateless bearer tokens: a JSON claims payload signed with HMAC-SHA256,
/// both parts base64url-encoded and joined with a dot. Verification is a
/// signature check plus an expiry check against the injected clock.
pub struct HmacTokenManager {
    key: Vec<u8>,
    ttl: chrono::Duration,
    clock: Arc<dyn Clock>,
}

impl HmacTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < 32 {
            return Err(ApplicationError::infrastructure(
                "session key must be at least 32 characters",
            ));
        }

        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            key: secret.as_bytes().to_vec(),
            ttl,
            clock,
        })
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn timestamp(seconds: i64) -> ApplicationResult<DateTime<Utc>> {
        Utc.timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| ApplicationError::unauthorized("malformed token timestamp"))
    }
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;

        let claims = TokenClaims {
            author: subject.author,
            session_id: subject.session_id.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        let signature = mac.finalize().into_bytes();

        let token = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature)
        );

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds(),
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (payload_b64, signature_b64) = token
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        mac.verify_slice(&signature)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))?;

        let claims: TokenClaims = serde_json::from_slice(&payload)
            .map_err(|_| ApplicationError::unauthorized("malformed token claims"))?;

        let issued_at = Self::timestamp(claims.iat)?;
        let expires_at = Self::timestamp(claims.exp)?;

        if self.clock.now() >= expires_at {
            return Err(ApplicationError::unauthorized("token expired"));
        }

        Ok(AuthenticatedUser {
            author: claims.author,
            session_id: claims.session_id,
            issued_at,
            expires_at,
        })
    }
}
