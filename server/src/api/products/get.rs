use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cropmatch_core::{Locale, Product};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetProductParams {
    /// Display locale for the localized title/description (default: en)
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    /// Title in the requested locale
    pub display_title: String,
    /// Description in the requested locale
    pub display_description: String,
}

#[utoipa::path(
    get,
    path = "/api/products/{slug}",
    tag = "products",
    params(
        ("slug" = String, Path, description = "Product routing slug"),
        GetProductParams
    ),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<GetProductParams>,
) -> impl IntoResponse {
    let product = match state.catalog.find_by_slug(&slug) {
        Some(p) => p,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Product not found".to_string(),
                }),
            )
                .into_response()
        }
    };

    let response = ProductResponse {
        display_title: product.localized_title(params.locale).to_string(),
        display_description: product.localized_description(params.locale).to_string(),
        product: product.clone(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
