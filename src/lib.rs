//! tldw - A Discord bot that summarizes YouTube videos using Gemini.
//!
//! This crate implements a single webhook-driven HTTP service:
//! 1. An interactions endpoint that verifies and answers Discord slash
//!    commands within the synchronous timeout window
//! 2. A tracked background task per `summarize` invocation that calls Gemini
//!    and edits the deferred response with the result
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP surface
//! - reqwest for outbound Discord and Gemini calls
//! - tokio-util's `TaskTracker` so in-flight summaries survive shutdown
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tldw::ai::GeminiClient;
//! use tldw::api::{AppState, build_app};
//! use tldw::core::config::AppConfig;
//! use tldw::discord::DiscordClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     tldw::setup_logging();
//!
//!     // Create a dummy AppConfig for the example
//!     let config = AppConfig {
//!         discord_public_key: "hex-encoded ed25519 key".to_string(),
//!         discord_token: "bot token".to_string(),
//!         discord_application_id: "application id".to_string(),
//!         gemini_api_key: None,
//!         gemini_model: None,
//!         bind_addr: "127.0.0.1:3000".to_string(),
//!     };
//!
//!     let summarizer = Arc::new(GeminiClient::new(
//!         config.gemini_api_key.clone(),
//!         config.model().to_string(),
//!     ));
//!     let discord = Arc::new(DiscordClient::new(
//!         config.discord_token.clone(),
//!         config.discord_application_id.clone(),
//!     ));
//!
//!     let state = AppState::new(config, summarizer, discord);
//!     let app = build_app(state.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(&state.config.bind_addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod discord;
pub mod errors;
pub mod prompt;
pub mod utils;
pub mod worker;

/// Configure structured logging for the server process.
///
/// Sets up tracing-subscriber with an `EnvFilter` honoring `RUST_LOG`
/// (default `info`) and an fmt layer. Call once at startup.
///
/// # Example
///
/// ```
/// tldw::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
