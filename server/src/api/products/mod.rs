pub mod get;
pub mod list;

use crate::AppState;
use axum::routing::get as get_method;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/products endpoints (mounted at /api/products)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get_method(list::list_products))
        .route("/{slug}", get_method(get::get_product))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_products, get::get_product),
    components(schemas(list::ProductListResponse, get::ProductResponse))
)]
pub struct ApiDoc;
