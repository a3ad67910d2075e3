//! Environment configuration tests
//!
//! Runs as a single test function because the scenarios mutate shared
//! process environment variables.

use promptgate_core::config::{
    Config, ConfigError, ENV_API_KEY, ENV_API_KEY_FALLBACK, ENV_BASE_URL, ENV_PORT,
    ENV_TIMEOUT_SECS,
};
use std::env;
use std::time::Duration;

fn clear_all() {
    for var in [
        ENV_API_KEY,
        ENV_API_KEY_FALLBACK,
        ENV_BASE_URL,
        ENV_PORT,
        ENV_TIMEOUT_SECS,
        promptgate_core::config::ENV_MODEL,
        promptgate_core::config::ENV_BIND_ADDR,
        promptgate_core::config::ENV_DATA_DIR,
    ] {
        env::remove_var(var);
    }
}

#[test]
fn from_env_scenarios() {
    // Missing API key fails
    clear_all();
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::EnvVarNotFound { var } if var == ENV_API_KEY));

    // Defaults with just an API key
    clear_all();
    env::set_var(ENV_API_KEY, "sk-test");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key.expose_secret(), "sk-test");
    assert_eq!(config.base_url, "https://api.openai.com/v1");
    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.port, 8000);
    assert_eq!(config.listen_addr(), "0.0.0.0:8000");

    // Fallback API key variable is honored
    clear_all();
    env::set_var(ENV_API_KEY_FALLBACK, "sk-fallback");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key.expose_secret(), "sk-fallback");

    // Overrides are applied
    clear_all();
    env::set_var(ENV_API_KEY, "sk-test");
    env::set_var(ENV_BASE_URL, "https://relay.example.com/openai");
    env::set_var(ENV_TIMEOUT_SECS, "5");
    env::set_var(ENV_PORT, "9100");
    let config = Config::from_env().unwrap();
    assert_eq!(config.base_url, "https://relay.example.com/openai");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.port, 9100);

    // Invalid base URL is rejected
    clear_all();
    env::set_var(ENV_API_KEY, "sk-test");
    env::set_var(ENV_BASE_URL, "not a url");
    assert!(matches!(
        Config::from_env().unwrap_err(),
        ConfigError::InvalidValue { var, .. } if var == ENV_BASE_URL
    ));

    // Zero timeout is rejected
    clear_all();
    env::set_var(ENV_API_KEY, "sk-test");
    env::set_var(ENV_TIMEOUT_SECS, "0");
    assert!(matches!(
        Config::from_env().unwrap_err(),
        ConfigError::InvalidValue { var, .. } if var == ENV_TIMEOUT_SECS
    ));

    // Non-numeric port is rejected
    clear_all();
    env::set_var(ENV_API_KEY, "sk-test");
    env::set_var(ENV_PORT, "not-a-port");
    assert!(matches!(
        Config::from_env().unwrap_err(),
        ConfigError::InvalidValue { var, .. } if var == ENV_PORT
    ));

    clear_all();
}
