//! Provider abstraction layer
//!
//! This module defines the adapter seam between the canonical chat types
//! and concrete upstream providers, so the upstream call shape can vary
//! without touching the forwarder.

pub mod adapter;
pub mod error;
pub mod openai;

pub use adapter::Provider;
pub use error::{ProviderError, ProviderResult};
pub use openai::OpenAiProvider;
