// src/presentation/http/controllers/auth.rs
use crate::application::{commands::auth::LoginCommand, dto::AuthTokenDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "A fresh session token.", body = AuthTokenDto),
        (status = 401, description = "The password is invalid.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "No site password has been set.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<AuthTokenDto>> {
    state
        .services
        .auth_commands
        .login(LoginCommand {
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 200, description = "The session is revoked.")
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .auth_commands
        .logout(&user)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "logged out" })))
}
