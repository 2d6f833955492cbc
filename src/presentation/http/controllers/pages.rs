// src/presentation/http/controllers/pages.rs
use crate::application::{
    commands::pages::{CreatePageCommand, UpdatePageCommand},
    dto::{PageDto, Paged},
    queries::pages::{GetPageBySlugQuery, ListPagesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_per_page() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListPagesParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePageRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    /// Comma-separated tag names.
    #[serde(default)]
    pub tags: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePageRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub tags: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/pages",
    params(ListPagesParams),
    responses(
        (status = 200, description = "Pages ordered by title. Private pages appear only with a valid bearer token.", body = crate::presentation::http::openapi::PageListResponse)
    ),
    tag = "Pages"
)]
pub async fn list_pages(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ListPagesParams>,
) -> HttpResult<Json<Paged<PageDto>>> {
    state
        .services
        .page_queries
        .list_pages(
            actor.0.as_ref(),
            ListPagesQuery {
                page: params.page,
                per_page: params.per_page,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/pages/main",
    responses(
        (status = 200, description = "The configured main page.", body = PageDto),
        (status = 404, description = "No visible main page is configured.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn main_page(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_queries
        .main_page(actor.0.as_ref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/pages/by-slug/{slug}",
    params(("slug" = String, Path, description = "Page slug")),
    responses(
        (status = 200, description = "The requested page.", body = PageDto),
        (status = 401, description = "The page is private.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No page has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn get_page_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_queries
        .get_page_by_slug(actor.0.as_ref(), GetPageBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/pages",
    request_body = CreatePageRequest,
    responses(
        (status = 200, description = "The created page, slug assigned.", body = PageDto),
        (status = 400, description = "The title is invalid.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn create_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePageRequest>,
) -> HttpResult<Json<PageDto>> {
    let command = CreatePageCommand {
        title: payload.title,
        content: payload.content,
        notes: payload.notes,
        is_private: payload.is_private,
        tags: payload.tags,
    };

    state
        .services
        .page_commands
        .create_page(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/pages/{id}",
    params(("id" = i64, Path, description = "Page id")),
    request_body = UpdatePageRequest,
    responses(
        (status = 200, description = "The updated page. The slug never changes on edit.", body = PageDto),
        (status = 400, description = "The title is invalid.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No page has this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn update_page(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePageRequest>,
) -> HttpResult<Json<PageDto>> {
    let command = UpdatePageCommand {
        id,
        title: payload.title,
        content: payload.content,
        notes: payload.notes,
        is_private: payload.is_private,
        tags: payload.tags,
    };

    state
        .services
        .page_commands
        .update_page(&user, command)
        .await
        .into_http()
        .map(Json)
}
