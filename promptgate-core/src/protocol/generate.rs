//! Inbound generate surface
//!
//! The request/response envelope the service exposes to its own clients.
//! A `GenerateRequest` carries a prompt plus optional generation
//! parameters; validation happens here so a malformed request is rejected
//! before any upstream call is issued.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::CompletionUsage;

/// Inbound request to the generate endpoint
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GenerateRequest {
    /// The prompt to forward upstream. Required and non-empty.
    #[serde(default)]
    pub prompt: String,

    /// Model identifier override; falls back to the configured default.
    pub model: Option<String>,

    /// Sampling temperature (0.0 to 2.0)
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Caller-supplied token echoed back in the response so clients can
    /// match replies to requests.
    pub correlation_id: Option<String>,
}

/// Validation failures for an inbound request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("prompt is required")]
    MissingPrompt,

    #[error("temperature must be between 0.0 and 2.0")]
    TemperatureOutOfRange,

    #[error("max_tokens must be at least 1")]
    MaxTokensZero,
}

impl GenerateRequest {
    /// Create a request carrying just a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Check the structural invariants an inbound request must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::MissingPrompt);
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) || temperature.is_nan() {
                return Err(ValidationError::TemperatureOutOfRange);
            }
        }
        if self.max_tokens == Some(0) {
            return Err(ValidationError::MaxTokensZero);
        }
        Ok(())
    }
}

/// Successful reply from the generate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The upstream provider's reply text
    pub result: String,

    /// Model that produced the reply
    pub model: String,

    /// Token usage, when the provider reported it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<CompletionUsage>,

    /// Echo of the caller's correlation identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}
