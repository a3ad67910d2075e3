//! Promptgate server binary

use anyhow::Context;
use promptgate_core::config::Config;
use promptgate_core::forward::Forwarder;
use promptgate_server::{app, state::AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("promptgate=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("loading configuration from environment")?;
    info!(
        upstream = %config.base_url,
        model = %config.model,
        timeout_secs = config.timeout.as_secs(),
        api_key = %config.api_key.partial_redact(),
        "configuration loaded"
    );

    let forwarder = Forwarder::from_config(&config).context("building upstream forwarder")?;

    let addr = config.listen_addr();
    let state = Arc::new(AppState { forwarder, config });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    info!(%addr, version = promptgate_core::version(), "promptgate listening");

    axum::serve(listener, app(state))
        .await
        .context("serving HTTP")?;

    Ok(())
}
