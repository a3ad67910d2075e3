//! The request forwarder
//!
//! Maps a validated inbound request onto exactly one upstream
//! chat-completion call and normalizes the reply. The upstream call
//! goes through the `HttpExecutor` trait so tests can substitute a
//! double for the live client.

use crate::config::Config;
use crate::http::client::HttpClient;
use crate::http::{CallKind, HttpExecutor, RequestOptions};
use crate::protocol::generate::{GenerateRequest, GenerateResponse, ValidationError};
use crate::protocol::types::{ChatRequest, Message};
use crate::providers::error::ProviderError;
use crate::providers::{OpenAiProvider, Provider};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced by the forwarder, tagged by who caused them
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Client-caused: the inbound request is malformed (HTTP 400)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Provider-caused: the upstream call failed (HTTP 502/504)
    #[error(transparent)]
    Upstream(#[from] ProviderError),

    /// Service-caused: an unexpected fault (HTTP 500)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Stateless forwarder from inbound requests to upstream completions
pub struct Forwarder {
    provider: Box<dyn Provider>,
    executor: Arc<dyn HttpExecutor>,
    default_model: String,
    timeout: Duration,
}

impl Forwarder {
    /// Create a forwarder over an explicit provider and executor.
    pub fn new(
        provider: Box<dyn Provider>,
        executor: Arc<dyn HttpExecutor>,
        default_model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            executor,
            default_model: default_model.into(),
            timeout,
        }
    }

    /// Build a forwarder wired to the configured OpenAI-compatible
    /// upstream with a live reqwest client.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let provider = Box::new(OpenAiProvider::with_base_url(&config.base_url));
        let executor = Arc::new(HttpClient::with_config(
            config.api_key.clone(),
            Duration::from_secs(10),
            config.timeout,
        )?);
        Ok(Self::new(
            provider,
            executor,
            config.model.clone(),
            config.timeout,
        ))
    }

    /// Handle one inbound request: validate, forward, normalize.
    ///
    /// Issues exactly one upstream call per invocation; validation
    /// failures short-circuit before any network activity.
    pub async fn handle(&self, request: GenerateRequest) -> Result<GenerateResponse, ForwardError> {
        request.validate()?;

        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.default_model.clone());

        let mut chat = ChatRequest::new(&model, vec![Message::user(request.prompt.clone())]);
        if let Some(temperature) = request.temperature {
            chat = chat.with_temperature(temperature);
        }
        if let Some(max_tokens) = request.max_tokens {
            chat = chat.with_max_tokens(max_tokens);
        }

        let mut options = RequestOptions::new(CallKind::Chat).with_timeout(self.timeout);
        if let Some(correlation_id) = &request.correlation_id {
            options = options.with_correlation_id(correlation_id.clone());
        }

        debug!(
            %model,
            request_id = %options.request_id,
            correlation_id = ?request.correlation_id,
            "forwarding request upstream"
        );

        let response = self
            .executor
            .execute_json(self.provider.as_ref(), chat, options)
            .await?;

        let result = response
            .first_content()
            .ok_or_else(|| {
                ProviderError::Parse("upstream returned no choices".to_string())
            })?
            .trim()
            .to_string();

        info!(model = %response.model, "forwarded request completed");

        Ok(GenerateResponse {
            result,
            model: response.model,
            usage: response.usage,
            correlation_id: request.correlation_id,
        })
    }
}

impl ForwardError {
    /// Whether this failure was an upstream timeout, which callers map
    /// to 504 rather than 502.
    pub fn is_upstream_timeout(&self) -> bool {
        matches!(self, ForwardError::Upstream(e) if e.is_timeout())
    }
}
