// src/presentation/http/controllers/site.rs
use crate::application::queries::site_options::SiteInfoDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/site",
    responses(
        (status = 200, description = "Site name and author, options over config defaults.", body = SiteInfoDto)
    ),
    tag = "Site"
)]
pub async fn site_info(Extension(state): Extension<HttpState>) -> HttpResult<Json<SiteInfoDto>> {
    state
        .services
        .option_queries
        .site_info()
        .await
        .into_http()
        .map(Json)
}
