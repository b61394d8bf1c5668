use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Read-only catalog metadata for discovery and documentation.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
    pub supported_crops: Vec<String>,
    pub endpoints: ApiEndpoints,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiEndpoints {
    #[serde(rename = "match")]
    pub match_crop: String,
    pub health: String,
}

#[utoipa::path(
    get,
    path = "/api/match-crop",
    tag = "matching",
    responses(
        (status = 200, description = "Catalog metadata and supported crop types", body = ApiInfoResponse)
    )
)]
pub async fn api_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiInfoResponse {
        message: "Crop to Product Matching API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_crops: state
            .catalog
            .crop_types()
            .map(|c| c.to_string())
            .collect(),
        endpoints: ApiEndpoints {
            match_crop: "POST /api/match-crop".to_string(),
            health: "GET /api/match-crop".to_string(),
        },
    })
}
