use crate::api::ErrorResponse;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cropmatch_core::{matcher, MatchResult};
use serde::Deserialize;
use std::time::Duration;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchCropRequest {
    /// Crop name or NFT ID, e.g. "tomato" or "Tomato #124"
    pub crop_input: String,
}

#[utoipa::path(
    post,
    path = "/api/match-crop",
    tag = "matching",
    request_body(content = MatchCropRequest, example = json!({"cropInput": "Tomato #124"})),
    responses(
        (status = 200, description = "Match result. A miss is still a successful result with confidence 0 and a null matchedProduct, never an error", body = MatchResult),
        (status = 400, description = "cropInput missing, not a string, or empty", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn match_crop(
    State(state): State<AppState>,
    payload: Result<Json<MatchCropRequest>, JsonRejection>,
) -> impl IntoResponse {
    // A missing body, a missing field, or a non-string cropInput all
    // surface as a rejection; callers get the same invalid-input error
    // either way. A well-formed input that matches nothing does NOT end
    // up here - that is a valid result.
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected match request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid crop input".to_string(),
                }),
            )
                .into_response();
        }
    };

    if req.crop_input.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid crop input".to_string(),
            }),
        )
            .into_response();
    }

    // Simulated processing latency for UI testing, off by default
    if state.config.match_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.match_delay_ms)).await;
    }

    let result = matcher::match_crop(state.catalog, &req.crop_input);

    tracing::info!(
        crop = %result.crop,
        confidence = result.confidence,
        matched = result.matched_product.is_some(),
        "crop match evaluated"
    );

    (StatusCode::OK, Json(result)).into_response()
}
