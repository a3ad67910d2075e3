//! HTTP error mapping utilities

use crate::providers::error::ProviderError;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

/// Map an HTTP status code and response body to a ProviderError
///
/// `timeout` is the deadline that governed the request, reported back in
/// timeout-shaped failures so error messages reflect the configured value.
pub fn map_http_error(
    status: StatusCode,
    body: Option<String>,
    request_id: Uuid,
    timeout: Duration,
) -> ProviderError {
    // Try to parse error details from the response body
    let detail = body
        .as_ref()
        .and_then(|b| serde_json::from_str::<Value>(b).ok())
        .and_then(|v| extract_error_message(&v));

    let message = detail
        .or(body)
        .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));

    // Include the request ID so log lines and errors correlate
    let message = format!("{} [request_id: {}]", message, request_id);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Authentication(message),

        // Retry-After lives in a header; the caller fills it in.
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimit { retry_after: None },

        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ProviderError::Timeout(timeout.as_secs())
        }

        status if status.is_server_error() => ProviderError::Server {
            status: status.as_u16(),
            message,
        },

        status if status.is_client_error() => ProviderError::InvalidRequest(message),

        _ => ProviderError::Network(message),
    }
}

/// Extract a human-readable message from common error response formats
fn extract_error_message(json: &Value) -> Option<String> {
    // OpenAI format: { "error": { "message": "...", "type": "...", "code": "..." } }
    if let Some(message) = json
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|v| v.as_str())
    {
        return Some(message.to_string());
    }

    // Generic formats: { "message": "..." } or { "error": "..." }
    if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
        return Some(message.to_string());
    }
    if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
        return Some(error.to_string());
    }

    None
}

/// Parse a Retry-After header value given in seconds
pub fn parse_retry_after(header_value: &str) -> Option<Duration> {
    // Retry-After can also be an HTTP date; only the seconds form is handled.
    header_value.parse::<u64>().ok().map(Duration::from_secs)
}
