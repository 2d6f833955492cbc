// src/presentation/http/controllers/tags.rs
use crate::application::{
    dto::{TagDto, TagWithPagesDto},
    queries::tags::GetTagQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    responses(
        (status = 200, description = "All tags, ordered by name.", body = [TagDto])
    ),
    tag = "Tags"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<TagDto>>> {
    state
        .services
        .tag_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/{id}",
    params(("id" = i64, Path, description = "Tag id")),
    responses(
        (status = 200, description = "The tag and its visible pages.", body = TagWithPagesDto),
        (status = 404, description = "No tag has this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn get_tag(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<TagWithPagesDto>> {
    state
        .services
        .tag_queries
        .get_tag(actor.0.as_ref(), GetTagQuery { id })
        .await
        .into_http()
        .map(Json)
}
