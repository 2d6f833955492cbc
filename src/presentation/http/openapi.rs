// src/presentation/http/openapi.rs
use crate::application::dto::PageDto;
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageListResponse {
    pub items: Vec<PageDto>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub has_more: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::site::site_info,
        crate::presentation::http::controllers::pages::list_pages,
        crate::presentation::http::controllers::pages::main_page,
        crate::presentation::http::controllers::pages::get_page_by_slug,
        crate::presentation::http::controllers::pages::create_page,
        crate::presentation::http::controllers::pages::update_page,
        crate::presentation::http::controllers::tags::list_tags,
        crate::presentation::http::controllers::tags::get_tag,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            PageListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::pages::CreatePageRequest,
            crate::presentation::http::controllers::pages::UpdatePageRequest,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::PageDto,
            crate::application::dto::TagDto,
            crate::application::dto::TagWithPagesDto,
            crate::application::queries::site_options::SiteInfoDto
        )
    ),
    tags(
        (name = "Auth", description = "Single-author session management"),
        (name = "Site", description = "Site identity"),
        (name = "Pages", description = "Wiki pages"),
        (name = "Tags", description = "Tag index"),
        (name = "System", description = "Service plumbing")
    ),
    info(
        title = "quire-core API",
        description = "Single-author wiki engine"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
