//! Configuration module for promptgate
//!
//! The service is configured entirely through environment variables: the
//! upstream API key and base URL, the default model, the request timeout,
//! and the listen address. Validation happens at load time so a
//! misconfigured deployment fails on startup rather than on the first
//! request.

mod error;
mod secrets;

pub use error::{ConfigError, ConfigResult};
pub use secrets::SecretString;

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Environment variable holding the upstream API key
pub const ENV_API_KEY: &str = "PROMPTGATE_API_KEY";
/// Fallback API key variable, honored for OpenAI-style deployments
pub const ENV_API_KEY_FALLBACK: &str = "OPENAI_API_KEY";
/// Environment variable overriding the upstream base URL
pub const ENV_BASE_URL: &str = "PROMPTGATE_BASE_URL";
/// Environment variable overriding the default model
pub const ENV_MODEL: &str = "PROMPTGATE_MODEL";
/// Environment variable overriding the upstream timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "PROMPTGATE_TIMEOUT_SECS";
/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "PROMPTGATE_PORT";
/// Environment variable overriding the bind address
pub const ENV_BIND_ADDR: &str = "PROMPTGATE_BIND_ADDR";
/// Environment variable overriding the readable data directory
pub const ENV_DATA_DIR: &str = "PROMPTGATE_DATA_DIR";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_DATA_DIR: &str = "/data";

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API key presented to the upstream provider
    pub api_key: SecretString,

    /// Base URL of the upstream provider (OpenAI-compatible)
    pub base_url: String,

    /// Default model when the caller does not specify one
    pub model: String,

    /// Per-request upstream timeout
    pub timeout: Duration,

    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Directory the read endpoint is confined to
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        let api_key = env::var(ENV_API_KEY)
            .or_else(|_| env::var(ENV_API_KEY_FALLBACK))
            .map_err(|_| ConfigError::EnvVarNotFound {
                var: ENV_API_KEY.to_string(),
            })?;
        if api_key.is_empty() {
            return Err(ConfigError::invalid(ENV_API_KEY, "must not be empty"));
        }

        let base_url = env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)
            .map_err(|e| ConfigError::invalid(ENV_BASE_URL, format!("not a valid URL: {}", e)))?;

        let model = env::var(ENV_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        if model.is_empty() {
            return Err(ConfigError::invalid(ENV_MODEL, "must not be empty"));
        }

        let timeout_secs = match env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::invalid(ENV_TIMEOUT_SECS, "expected an integer"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::invalid(
                ENV_TIMEOUT_SECS,
                "must be at least 1 second",
            ));
        }

        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid(ENV_PORT, "expected a port number"))?,
            Err(_) => DEFAULT_PORT,
        };

        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let data_dir =
            PathBuf::from(env::var(ENV_DATA_DIR).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()));

        Ok(Self {
            api_key: SecretString::new(api_key),
            base_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
            bind_addr,
            port,
            data_dir,
        })
    }

    /// Socket address string the server should bind to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
