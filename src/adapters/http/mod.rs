//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles every endpoint with the shared middleware stack.

pub mod qualification;

use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use qualification::{qualification_router, QualificationAppState};

/// Builds the application router.
///
/// Every route is traced and bounded by `request_timeout`.
pub fn app_router(state: QualificationAppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(qualification_router().with_state(state))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
