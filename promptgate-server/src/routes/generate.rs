//! The generate endpoint: the proxy operation

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use promptgate_core::protocol::generate::{GenerateRequest, GenerateResponse};
use std::sync::Arc;
use tracing::debug;

/// POST /v1/generate - forward a prompt to the upstream provider
///
/// Body: `{"prompt": "...", "model"?, "temperature"?, "max_tokens"?,
/// "correlation_id"?}`. Returns `{"result": ...}` on success or
/// `{"error": ...}` with 400/502/504/500 on failure.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    // A body that does not parse is a caller fault, same as a missing prompt.
    let Json(request) = payload.map_err(|rejection| {
        ApiError::validation(format!("invalid request body: {}", rejection.body_text()))
    })?;

    debug!(correlation_id = ?request.correlation_id, "generate request received");

    let response = state.forwarder.handle(request).await?;
    Ok(Json(response))
}
