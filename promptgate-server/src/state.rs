//! Shared application state

use promptgate_core::config::Config;
use promptgate_core::forward::Forwarder;

/// State shared across all handlers
pub struct AppState {
    /// The request forwarder
    pub forwarder: Forwarder,

    /// Service configuration
    pub config: Config,
}
