//! Axum router wiring: the liveness probe and the single RPC endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use gantry_rpc::Dispatcher;

use crate::middleware::recover;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

/// Builds the service router.
///
/// Middleware, outermost first: permissive CORS, request tracing, then
/// panic recovery. Recovery sits innermost so its replacement response
/// still passes through tracing and CORS header injection on the way out.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/rpc", post(handle_rpc))
        .with_state(state)
        .layer(middleware::from_fn(recover))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Liveness probe.
async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "healthy", "message": "ok"}))
}

/// The RPC endpoint. Always replies 200; failures live inside the
/// JSON-RPC envelope.
async fn handle_rpc(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let outcome = state.dispatcher.handle(&body, None).await;
    Json(outcome)
}
