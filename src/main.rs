use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use tldw::ai::GeminiClient;
use tldw::api::{AppState, build_app};
use tldw::core::config::AppConfig;
use tldw::discord::DiscordClient;

#[tokio::main]
async fn main() -> Result<()> {
    tldw::setup_logging();

    let config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("Configuration error: {e}"))?;

    let summarizer = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.model().to_string(),
    ));
    let discord = Arc::new(DiscordClient::new(
        config.discord_token.clone(),
        config.discord_application_id.clone(),
    ));

    let state = AppState::new(config, summarizer, discord);
    let tasks = state.tasks.clone();
    let bind_addr = state.config.bind_addr.clone();

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    info!("Listening on {}", bind_addr);
    info!("  POST /interactions");
    info!("  POST /register");
    info!("  GET  /");
    info!("  GET  /id");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to serve HTTP")?;

    // Drain in-flight summarize tasks before exiting.
    info!("Shutting down, waiting for background tasks");
    tasks.close();
    tasks.wait().await;

    Ok(())
}

/// Waits for either Ctrl+C or SIGTERM (on Unix).
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut term = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
