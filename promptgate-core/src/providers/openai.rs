//! OpenAI-compatible provider implementation
//!
//! Implements the Provider trait for OpenAI's chat completions API and for
//! any OpenAI-compatible proxy: the base URL is supplied by configuration
//! rather than hardcoded, since deployments commonly point the service at
//! a relay in front of the real API.

use crate::http::CallKind;
use crate::providers::adapter::Provider;
use std::collections::HashMap;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible provider
pub struct OpenAiProvider {
    base_url: String,
}

impl OpenAiProvider {
    /// Create a provider pointing at the real OpenAI API
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a provider pointing at an OpenAI-compatible base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Tolerate configured URLs with a trailing slash.
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, call_kind: CallKind) -> &str {
        match call_kind {
            CallKind::Chat => "/chat/completions",
        }
    }

    fn headers(&self, api_key: &str) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), format!("Bearer {}", api_key));
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }
}

impl Default for OpenAiProvider {
    fn default() -> Self {
        Self::new()
    }
}
