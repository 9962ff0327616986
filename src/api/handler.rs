//! HTTP request handlers - thin routing layer over the interaction flow.
//!
//! This module handles:
//! - Signature validation on the interactions webhook
//! - Interaction dispatch (ping, `about`, `summarize`)
//! - Command registration with Discord
//! - Diagnostic routes

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::AppState;
use super::interaction::{Interaction, InteractionKind};
use super::responses::{channel_message, deferred_message, pong};
use super::signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER, verify_signature};
use crate::core::models::SummarizeTask;
use crate::discord::commands::{ABOUT, SUMMARIZE, URL_OPTION};
use crate::utils::links::contains_video_link;
use crate::worker::run_summarize_task;

/// Static reply for the `about` command.
pub const ABOUT_TEXT: &str = "I summarize YouTube videos so you don't have to watch them. \
    Use /summarize with a video URL and I'll reply with timestamped highlights.";

/// Sync reply when `summarize` is invoked without a `url` option.
pub const MISSING_URL_MESSAGE: &str =
    "Please provide a YouTube URL to summarize, e.g. /summarize url:https://youtu.be/dQw4w9WgXcQ";

/// Sync reply when the supplied text contains no recognizable video link.
pub const NO_LINK_MESSAGE: &str =
    "That doesn't look like a YouTube link I can read. Please check the URL and try again.";

/// Reply for interaction kinds the bot does not handle.
pub const UNSUPPORTED_INTERACTION_MESSAGE: &str =
    "I can only respond to slash commands. Try /about or /summarize.";

/// Handler for the Discord interactions webhook.
///
/// Verifies the request signature, then dispatches by interaction kind. A
/// bad or missing signature gets a 401 before anything else happens.
#[tracing::instrument(level = "info", skip(state, headers, body))]
pub async fn handle_interactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some((timestamp, signature)) = signature_headers(&headers) else {
        warn!("Interaction request missing signature headers");
        return unauthorized();
    };

    if !verify_signature(
        &body,
        &timestamp,
        &signature,
        &state.config.discord_public_key,
    ) {
        warn!("Interaction request failed signature verification");
        return unauthorized();
    }

    let interaction = match Interaction::parse(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            error!("Failed to parse interaction: {}", e);
            return (StatusCode::BAD_REQUEST, "invalid interaction payload").into_response();
        }
    };

    match interaction.kind() {
        InteractionKind::Ping => {
            info!("Responding to ping interaction");
            Json(pong()).into_response()
        }
        InteractionKind::Command => handle_command(&state, &interaction),
        InteractionKind::Other => {
            info!(
                "Received unsupported interaction type {}",
                interaction.interaction_type
            );
            Json(channel_message(UNSUPPORTED_INTERACTION_MESSAGE)).into_response()
        }
    }
}

fn handle_command(state: &AppState, interaction: &Interaction) -> Response {
    match interaction.command_name() {
        Some(ABOUT) => {
            info!("Responding to about command");
            Json(channel_message(ABOUT_TEXT)).into_response()
        }
        Some(SUMMARIZE) => handle_summarize(state, interaction),
        other => {
            warn!("Unknown command: {:?}", other);
            (StatusCode::BAD_REQUEST, "unknown command").into_response()
        }
    }
}

/// Answers a `summarize` invocation.
///
/// Input problems are reported synchronously; a usable link gets a deferred
/// acknowledgment and a background task tracked by the shared tracker.
fn handle_summarize(state: &AppState, interaction: &Interaction) -> Response {
    let Some(url_text) = interaction.option_str(URL_OPTION) else {
        info!("Summarize command missing url option");
        return Json(channel_message(MISSING_URL_MESSAGE)).into_response();
    };

    if !contains_video_link(url_text) {
        info!("Summarize command with no extractable video link");
        return Json(channel_message(NO_LINK_MESSAGE)).into_response();
    }

    let task = SummarizeTask {
        correlation_id: Uuid::new_v4().to_string(),
        delivery_token: interaction.token.clone(),
        url_text: url_text.to_string(),
    };

    info!(
        "Acknowledged summarize command, queuing background task (corr_id={})",
        task.correlation_id
    );

    let summarizer = Arc::clone(&state.summarizer);
    let discord = Arc::clone(&state.discord);
    state
        .tasks
        .spawn(run_summarize_task(summarizer, discord, task));

    Json(deferred_message()).into_response()
}

/// Handler for `POST /register`: bulk-overwrites both slash commands.
pub async fn handle_register(State(state): State<AppState>) -> Response {
    info!("Registering slash commands with Discord");

    match state.discord.register_commands().await {
        Ok(()) => Json(json!({ "registered": [ABOUT, SUMMARIZE] })).into_response(),
        Err(e) => {
            error!("Command registration failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Handler for `GET /`: health/info line.
pub async fn index() -> &'static str {
    "tldw: too long; didn't watch. POST Discord interactions to /interactions."
}

/// Handler for `GET /id`: echoes the configured application id.
pub async fn app_id(State(state): State<AppState>) -> String {
    state.config.discord_application_id.clone()
}

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found").into_response()
}

fn signature_headers(headers: &HeaderMap) -> Option<(String, String)> {
    let timestamp = headers.get(TIMESTAMP_HEADER)?.to_str().ok()?;
    let signature = headers.get(SIGNATURE_HEADER)?.to_str().ok()?;
    Some((timestamp.to_string(), signature.to_string()))
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, "invalid request signature").into_response()
}
