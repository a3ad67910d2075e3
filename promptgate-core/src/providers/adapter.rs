//! Provider adapter trait
//!
//! Defines the core abstraction for upstream LLM providers: where to send
//! a request, which headers it needs, and how to reshape the canonical
//! types into the provider's own contract.

use crate::http::CallKind;
use crate::protocol::types::{ChatRequest, ChatResponse};
use std::collections::HashMap;

/// Core provider trait that all upstream providers must implement
pub trait Provider: Send + Sync {
    /// Get the provider's name
    fn name(&self) -> &str;

    /// Get the base URL for this provider
    fn base_url(&self) -> &str;

    /// Get the endpoint path for a specific call kind
    fn endpoint(&self, call_kind: CallKind) -> &str;

    /// Get headers required for this provider
    fn headers(&self, api_key: &str) -> HashMap<String, String>;

    /// Transform a request from canonical format to provider-specific format
    fn transform_request(&self, request: ChatRequest) -> ChatRequest {
        request
    }

    /// Transform a response from provider-specific format to canonical format
    fn transform_response(&self, response: ChatResponse) -> ChatResponse {
        response
    }
}
