//! Axum HTTP surface: shared state, router and request handlers.

pub mod handler;
pub mod interaction;
pub mod responses;
pub mod signature;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tokio_util::task::TaskTracker;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::ai::Summarizer;
use crate::core::config::AppConfig;
use crate::discord::DiscordClient;

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub summarizer: Arc<dyn Summarizer>,
    pub discord: Arc<DiscordClient>,
    /// Tracks background summarize tasks so shutdown can drain them.
    pub tasks: TaskTracker,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: AppConfig,
        summarizer: Arc<dyn Summarizer>,
        discord: Arc<DiscordClient>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            summarizer,
            discord,
            tasks: TaskTracker::new(),
        }
    }
}

/// Builds the application router with body-limit and timeout layers.
#[must_use]
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .route("/id", get(handler::app_id))
        .route("/interactions", post(handler::handle_interactions))
        .route("/register", post(handler::handle_register))
        .fallback(handler::not_found)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
}
