use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use cropmatch_core::Product;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All catalog products in catalog order", body = ProductListResponse)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    Json(ProductListResponse {
        products: state.catalog.products().to_vec(),
    })
}
