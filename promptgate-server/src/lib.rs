//! Promptgate HTTP surface
//!
//! Wires the core forwarder into an axum application:
//! - `POST /v1/generate` — forward a prompt to the upstream provider
//! - `GET /read` — return a file from the configured data directory
//! - `GET /healthz` — liveness probe

pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router over the shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/generate", post(routes::generate::generate))
        .route("/read", get(routes::read::read_file))
        .route("/healthz", get(routes::health::healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
