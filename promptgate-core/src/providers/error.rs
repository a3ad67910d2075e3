//! Provider error types and handling

use std::time::Duration;
use thiserror::Error;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors that can occur when interacting with upstream providers
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network or connection error
    #[error("network error: {0}")]
    Network(String),

    /// Authentication failed
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimit { retry_after: Option<Duration> },

    /// Upstream rejected the request (4xx)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream server error (5xx)
    #[error("upstream server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Timeout occurred
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Response parsing error
    #[error("failed to parse upstream response: {0}")]
    Parse(String),
}

impl ProviderError {
    /// Whether the caller could reasonably retry the request
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimit { .. } | Self::Timeout(_) | Self::Server { .. } | Self::Network(_)
        )
    }

    /// Whether the failure was the upstream exceeding its deadline
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryability() {
        assert!(ProviderError::Timeout(30).is_retryable());
        assert!(ProviderError::Server {
            status: 503,
            message: "down".to_string()
        }
        .is_retryable());
        assert!(!ProviderError::InvalidRequest("bad".to_string()).is_retryable());
        assert!(!ProviderError::Authentication("denied".to_string()).is_retryable());
    }

    #[test]
    fn test_timeout_classification() {
        assert!(ProviderError::Timeout(30).is_timeout());
        assert!(!ProviderError::Network("refused".to_string()).is_timeout());
    }
}
