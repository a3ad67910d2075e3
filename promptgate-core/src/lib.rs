//! Promptgate Core Library
//!
//! This crate provides the core functionality for the promptgate service:
//! a stateless forwarder that maps inbound prompt requests onto upstream
//! chat-completion calls and normalizes the results.

pub mod config;
pub mod forward;
pub mod http;
pub mod protocol;
pub mod providers;

/// Returns the version of the promptgate core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
