//! HTTP layer for upstream provider calls
//!
//! This module handles:
//! - Connection pooling and client management
//! - Error mapping from HTTP failures to provider errors
//! - Request ID generation and correlation
//!
//! The executor is a trait so the forwarder can be exercised against a
//! test double instead of a live upstream.

pub mod client;
pub mod error;

use crate::protocol::types::{ChatRequest, ChatResponse};
use crate::providers::adapter::Provider;
use crate::providers::error::ProviderError;
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

/// Type of API call being made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// Chat completion request
    Chat,
}

/// Options for an upstream request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Type of API call
    pub call_kind: CallKind,

    /// Unique request ID for correlation in logs and upstream headers
    pub request_id: Uuid,

    /// Request timeout
    pub timeout: Duration,

    /// Caller-supplied correlation token, if any
    pub correlation_id: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            call_kind: CallKind::Chat,
            request_id: Uuid::new_v4(),
            timeout: Duration::from_secs(30),
            correlation_id: None,
        }
    }
}

impl RequestOptions {
    /// Create new request options with a generated request ID
    pub fn new(call_kind: CallKind) -> Self {
        Self {
            call_kind,
            ..Default::default()
        }
    }

    /// Set the timeout for this request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attach a caller-supplied correlation identifier
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }
}

/// Trait for upstream HTTP executors
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Execute a non-streaming JSON request against the provider
    async fn execute_json(
        &self,
        provider: &dyn Provider,
        request: ChatRequest,
        options: RequestOptions,
    ) -> Result<ChatResponse, ProviderError>;
}
