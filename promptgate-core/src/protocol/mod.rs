//! Protocol module for request/response structures
//!
//! This module defines the data models the service speaks on both sides:
//! the inbound generate surface exposed to clients, and the canonical
//! chat-completion structures sent to upstream providers. These structures
//! are designed to be:
//! - Provider-agnostic
//! - Extensible through optional fields
//! - Type-safe and serializable

pub mod generate;
pub mod types;

pub use generate::{GenerateRequest, GenerateResponse};
pub use types::{
    ChatRequest, ChatResponse, CompletionUsage, Message, MessageRole, ResponseChoice,
};
