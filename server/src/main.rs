mod api;
mod config;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::Router;
use config::ServerConfig;
use cropmatch_core::Catalog;
use std::env;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers
pub struct AppContext {
    pub catalog: &'static Catalog,
    pub config: ServerConfig,
}

pub type AppState = Arc<AppContext>;

/// Console logging with RUST_LOG-style filtering.
fn init_telemetry() {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Build the application router. Separate from main so tests can drive
/// the full routing and serialization stack without a listener.
fn app(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .merge(api::match_crop::router())
        .nest("/api/products", api::products::router())
        .merge(swagger_ui)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    init_telemetry();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let bind_addr = config.bind_addr.clone();

    let state: AppState = Arc::new(AppContext {
        catalog: Catalog::shared(),
        config,
    });

    let app = app(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str)
                    .unwrap_or(request.uri().path());

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %matched_path,
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &Span| {
                    let status = response.status().as_u16();
                    if status >= 500 {
                        tracing::error!(
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "request failed with server error"
                        );
                    } else {
                        tracing::info!(
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "request completed"
                        );
                    }
                },
            )
            .on_failure(
                |error: tower_http::classify::ServerErrorsFailureClass,
                 latency: std::time::Duration,
                 _span: &Span| {
                    tracing::error!(
                        error = %error,
                        latency_ms = %latency.as_millis(),
                        "request failed"
                    );
                },
            ),
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://localhost:3000/swagger-ui/");
    tracing::info!("OpenAPI spec available at http://localhost:3000/api-docs/openapi.json");

    axum::serve(listener, app).await.unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(Arc::new(AppContext {
            catalog: Catalog::shared(),
            config: ServerConfig::default(),
        }))
    }

    async fn post_match(body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/match-crop")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_match_crop_exact_match() {
        let (status, body) = post_match(json!({"cropInput": "Tomato #124"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["crop"], "Tomato #124");
        assert_eq!(body["confidence"], 95);
        assert_eq!(body["matchedProduct"]["cropType"], "tomato");
        assert_eq!(
            body["matchedProduct"]["title"],
            "Fresh Organic Tomato Box (2kg)"
        );
    }

    #[tokio::test]
    async fn test_match_crop_miss_is_ok_not_error() {
        let (status, body) = post_match(json!({"cropInput": "durian"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["confidence"], 0);
        assert!(body["matchedProduct"].is_null());
        assert!(body["matchReason"]
            .as_str()
            .unwrap()
            .contains("tomato, carrot, lettuce, eggplant, potato"));
    }

    #[tokio::test]
    async fn test_match_crop_missing_field_is_bad_request() {
        let (status, body) = post_match(json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid crop input");
        assert!(body.get("matchedProduct").is_none());
    }

    #[tokio::test]
    async fn test_match_crop_non_string_input_is_bad_request() {
        let (status, body) = post_match(json!({"cropInput": 124})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid crop input");
    }

    #[tokio::test]
    async fn test_match_crop_empty_input_is_bad_request() {
        let (status, body) = post_match(json!({"cropInput": ""})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid crop input");
    }

    #[tokio::test]
    async fn test_match_crop_whitespace_input_is_a_miss_not_an_error() {
        // Only the empty string is invalid input; whitespace-only input
        // is accepted, normalizes to nothing, and matches no product.
        let (status, body) = post_match(json!({"cropInput": "   "})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["crop"], "   ");
        assert_eq!(body["confidence"], 0);
        assert!(body["matchedProduct"].is_null());
    }

    #[tokio::test]
    async fn test_api_info_lists_supported_crops() {
        let (status, body) = get_json("/api/match-crop").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Crop to Product Matching API");
        assert_eq!(
            body["supportedCrops"],
            json!(["tomato", "carrot", "lettuce", "eggplant", "potato"])
        );
        assert_eq!(body["endpoints"]["match"], "POST /api/match-crop");
    }

    #[tokio::test]
    async fn test_list_products() {
        let (status, body) = get_json("/api/products").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["products"].as_array().unwrap().len(), 5);
        assert_eq!(body["products"][0]["cropType"], "tomato");
    }

    #[tokio::test]
    async fn test_get_product_by_slug() {
        let (status, body) = get_json("/api/products/organic-tomato-box").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cropType"], "tomato");
        assert_eq!(body["displayTitle"], "Fresh Organic Tomato Box (2kg)");
    }

    #[tokio::test]
    async fn test_get_product_korean_locale() {
        let (status, body) = get_json("/api/products/organic-tomato-box?locale=ko").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["displayTitle"], "유기농 토마토 박스 (2kg)");
        // The raw record is unchanged; only the display fields localize.
        assert_eq!(body["title"], "Fresh Organic Tomato Box (2kg)");
    }

    #[tokio::test]
    async fn test_get_product_unknown_slug_is_not_found() {
        let (status, body) = get_json("/api/products/no-such-slug").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Product not found");
    }

    #[test]
    fn test_openapi_spec_builds() {
        let spec = api::openapi();
        assert!(spec.paths.paths.contains_key("/api/match-crop"));
        assert!(spec.paths.paths.contains_key("/api/products"));
        assert!(spec.paths.paths.contains_key("/api/products/{slug}"));
    }
}
