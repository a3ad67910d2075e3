//! API error responses
//!
//! Every failure leaves the service as structured JSON `{"error": ...}`
//! with a status code derived from who caused the fault: 400 for the
//! caller, 502/504 for the upstream, 500 for the service itself.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use promptgate_core::forward::ForwardError;
use serde_json::json;
use tracing::{error, warn};

/// An error ready to be rendered to the HTTP caller
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Client-caused error (HTTP 400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Resource not found (HTTP 404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Service-caused error (HTTP 500); the detail is logged, not leaked.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        error!("internal error: {}", detail);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal error".to_string(),
        }
    }
}

impl From<ForwardError> for ApiError {
    fn from(err: ForwardError) -> Self {
        match err {
            ForwardError::Validation(e) => Self::validation(e.to_string()),
            ForwardError::Upstream(e) if e.is_timeout() => {
                warn!("upstream timeout: {}", e);
                Self {
                    status: StatusCode::GATEWAY_TIMEOUT,
                    message: "upstream timeout".to_string(),
                }
            }
            ForwardError::Upstream(e) => {
                warn!(retryable = e.is_retryable(), "upstream failure: {}", e);
                Self {
                    status: StatusCode::BAD_GATEWAY,
                    message: e.to_string(),
                }
            }
            ForwardError::Internal(detail) => Self::internal(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
