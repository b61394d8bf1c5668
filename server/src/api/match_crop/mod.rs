pub mod info;
pub mod post;

use crate::AppState;
use axum::routing::post as post_method;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the /api/match-crop endpoints
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/match-crop",
        post_method(post::match_crop).get(info::api_info),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(post::match_crop, info::api_info),
    components(schemas(
        post::MatchCropRequest,
        info::ApiInfoResponse,
        info::ApiEndpoints,
    ))
)]
pub struct ApiDoc;
