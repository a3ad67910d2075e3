//! HTTP client implementation using reqwest

use crate::config::SecretString;
use crate::http::{error, CallKind, HttpExecutor, RequestOptions};
use crate::protocol::types::{ChatRequest, ChatResponse};
use crate::providers::adapter::Provider;
use crate::providers::error::ProviderError;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Maximum response size (10MB)
const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024;

/// Default user agent
const USER_AGENT: &str = concat!("promptgate/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client with connection pooling
#[derive(Clone)]
pub struct HttpClient {
    /// The underlying reqwest client
    client: Arc<Client>,

    /// API key presented to the provider
    api_key: SecretString,

    /// Maximum response size to prevent OOM
    max_response_size: usize,
}

impl HttpClient {
    /// Create a new HTTP client with default timeouts
    pub fn new(api_key: SecretString) -> Result<Self, ProviderError> {
        Self::with_config(api_key, Duration::from_secs(10), Duration::from_secs(30))
    }

    /// Create a new HTTP client with custom timeouts
    pub fn with_config(
        api_key: SecretString,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| ProviderError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client: Arc::new(client),
            api_key,
            max_response_size: MAX_RESPONSE_SIZE,
        })
    }

    /// Build the full URL for a provider and call kind
    fn build_url(&self, provider: &dyn Provider, call_kind: CallKind) -> String {
        format!("{}{}", provider.base_url(), provider.endpoint(call_kind))
    }

    /// Validate response content type
    fn validate_content_type(response: &Response) -> Result<(), ProviderError> {
        if let Some(content_type) = response.headers().get("content-type") {
            let content_type = content_type.to_str().unwrap_or("").to_lowercase();
            if !content_type.contains("application/json") {
                return Err(ProviderError::Parse(format!(
                    "expected application/json, got: {}",
                    content_type
                )));
            }
        }
        Ok(())
    }

    /// Check advertised response size to prevent OOM
    fn check_content_length(&self, response: &Response) -> Result<(), ProviderError> {
        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_response_size {
                return Err(ProviderError::Parse(format!(
                    "response size {} exceeds maximum {}",
                    content_length, self.max_response_size
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl HttpExecutor for HttpClient {
    async fn execute_json(
        &self,
        provider: &dyn Provider,
        request: ChatRequest,
        options: RequestOptions,
    ) -> Result<ChatResponse, ProviderError> {
        let request_id = options.request_id;

        info!(
            provider = provider.name(),
            %request_id,
            "executing upstream request"
        );

        let url = self.build_url(provider, options.call_kind);
        debug!(%url, "request URL");

        // Transform request to provider format
        let transformed = provider.transform_request(request);

        let mut req_builder = self
            .client
            .post(&url)
            .timeout(options.timeout)
            .json(&transformed);

        for (key, value) in provider.headers(self.api_key.expose_secret()) {
            req_builder = req_builder.header(key, value);
        }

        // Request ID header for correlation across services
        req_builder = req_builder.header("X-Request-ID", request_id.to_string());

        let response = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                warn!(provider = provider.name(), %request_id, "upstream request timed out");
                ProviderError::Timeout(options.timeout.as_secs())
            } else if e.is_connect() {
                error!(provider = provider.name(), %request_id, "connection error: {}", e);
                ProviderError::Network(format!("connection failed: {}", e))
            } else {
                error!(provider = provider.name(), %request_id, "request error: {}", e);
                ProviderError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        debug!(%status, %request_id, "upstream response status");

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(error::parse_retry_after);

            let body = response.text().await.ok();

            warn!(
                provider = provider.name(),
                %status,
                %request_id,
                "upstream request failed"
            );

            let mut mapped = error::map_http_error(status, body, request_id, options.timeout);
            if let ProviderError::RateLimit { retry_after: slot } = &mut mapped {
                *slot = retry_after;
            }
            return Err(mapped);
        }

        Self::validate_content_type(&response)?;
        self.check_content_length(&response)?;

        let response_text = response.text().await.map_err(|e| {
            ProviderError::Network(format!(
                "failed to read response body: {} [request_id: {}]",
                e, request_id
            ))
        })?;

        // Content-Length can lie; check again after reading.
        if response_text.len() > self.max_response_size {
            return Err(ProviderError::Parse(format!(
                "response size {} exceeds maximum {}",
                response_text.len(),
                self.max_response_size
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!(provider = provider.name(), %request_id, "failed to parse response: {}", e);
            ProviderError::Parse(format!("{} [request_id: {}]", e, request_id))
        })?;

        let canonical = provider.transform_response(parsed);

        info!(provider = provider.name(), %request_id, "upstream request completed");

        Ok(canonical)
    }
}
