//! Discord REST API client module
//!
//! Encapsulates the webhook follow-up edit and command registration calls.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::discord::commands::command_descriptors;
use crate::errors::BotError;

const API_BASE: &str = "https://discord.com/api/v10";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Discord's hard limit on message content length, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Discord REST API client for follow-up edits and command registration.
pub struct DiscordClient {
    http: Client,
    token: String,
    application_id: String,
    api_base: String,
}

impl DiscordClient {
    #[must_use]
    pub fn new(token: String, application_id: String) -> Self {
        Self::with_api_base(token, application_id, API_BASE.to_string())
    }

    /// Builds a client against a non-default API base.
    #[must_use]
    pub fn with_api_base(token: String, application_id: String, api_base: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            token,
            application_id,
            api_base,
        }
    }

    /// Edits the deferred original interaction response through the webhook
    /// resource. The delivery token itself authorizes the edit; no bot token
    /// is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Discord responds with a
    /// non-success status.
    pub async fn edit_original_response(
        &self,
        delivery_token: &str,
        content: &str,
    ) -> Result<(), BotError> {
        let url = format!(
            "{}/webhooks/{}/{}/messages/@original",
            self.api_base, self.application_id, delivery_token
        );

        let body = json!({ "content": truncate_content(content) });

        let response = self
            .http
            .patch(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("Discord webhook request failed: {e}")))?;

        check_status(response, "edit original response").await
    }

    /// Bulk-overwrites the application's global slash commands.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Discord responds with a
    /// non-success status.
    pub async fn register_commands(&self) -> Result<(), BotError> {
        let url = format!(
            "{}/applications/{}/commands",
            self.api_base, self.application_id
        );

        let response = self
            .http
            .put(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .json(&command_descriptors())
            .send()
            .await
            .map_err(|e| {
                BotError::HttpError(format!("Discord registration request failed: {e}"))
            })?;

        check_status(response, "register commands").await
    }
}

async fn check_status(response: reqwest::Response, action: &str) -> Result<(), BotError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read body>".to_string());
    Err(BotError::DiscordError(format!(
        "Discord API error ({action}, status {status}): {error_text}"
    )))
}

/// Truncates message content to Discord's limit on a char boundary, with a
/// trailing marker when anything was cut.
#[must_use]
pub fn truncate_content(content: &str) -> String {
    if content.chars().count() <= MAX_MESSAGE_LENGTH {
        return content.to_string();
    }

    let mut truncated: String = content.chars().take(MAX_MESSAGE_LENGTH - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_content_leaves_short_messages_alone() {
        assert_eq!(truncate_content("short"), "short");

        let exact = "a".repeat(MAX_MESSAGE_LENGTH);
        assert_eq!(truncate_content(&exact), exact);
    }

    #[test]
    fn test_truncate_content_caps_at_discord_limit() {
        let long = "a".repeat(MAX_MESSAGE_LENGTH + 500);
        let truncated = truncate_content(&long);
        assert_eq!(truncated.chars().count(), MAX_MESSAGE_LENGTH);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_truncate_content_counts_chars_not_bytes() {
        let long = "é".repeat(MAX_MESSAGE_LENGTH + 10);
        let truncated = truncate_content(&long);
        assert_eq!(truncated.chars().count(), MAX_MESSAGE_LENGTH);
    }
}
