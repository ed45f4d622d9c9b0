use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

pub mod intel_brief;
pub mod smart_search;
pub mod state;

pub use state::AppState;

/// Creates the application router with all routes
///
/// CORS is fully permissive: the API is consumed by a public frontend.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/smart-search", post(smart_search::smart_search))
        .route("/intel-brief", post(intel_brief::intel_brief))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
