//! Gemini API client module
//!
//! Encapsulates the `generateContent` call used to summarize videos.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::BotError;
use crate::prompt::build_summary_prompt;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const MAX_OUTPUT_TOKENS: usize = 1024;
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Provider seam for generating video summaries.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produces a plain-text summary for the video behind `watch_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured, the HTTP request fails
    /// or the provider reports an error.
    async fn summarize(&self, watch_url: &str, video_id: &str) -> Result<String, BotError>;
}

/// Gemini API client for generating video summaries.
pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self::with_api_base(api_key, model, GEMINI_API_BASE.to_string())
    }

    /// Builds a client against a non-default API base.
    #[must_use]
    pub fn with_api_base(api_key: Option<String>, model: String, api_base: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            api_key,
            model,
            api_base,
        }
    }

    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        watch_url: &str,
    ) -> Result<String, BotError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, self.model, api_key
        );

        let request_body = build_generate_request(prompt, watch_url);

        let response = self
            .http
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(BotError::GeminiError(format!(
                "Gemini API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| BotError::GeminiError(format!("Failed to parse Gemini response: {e}")))?;

        if let Some(message) = response_json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return Err(BotError::GeminiError(message.to_string()));
        }

        Ok(response_text(&response_json))
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(&self, watch_url: &str, video_id: &str) -> Result<String, BotError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(BotError::ConfigError(
                "GEMINI_API_KEY is not set".to_string(),
            ));
        };

        info!("Requesting Gemini summary for video {}", video_id);

        let prompt = build_summary_prompt(watch_url);
        self.generate(api_key, &prompt, watch_url).await
    }
}

/// Builds the `generateContent` request body: the instruction prompt plus a
/// `fileData` reference pointing Gemini at the video itself.
pub(crate) fn build_generate_request(prompt: &str, watch_url: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                { "text": prompt },
                { "fileData": { "fileUri": watch_url } }
            ]
        }],
        "generationConfig": {
            "maxOutputTokens": MAX_OUTPUT_TOKENS
        }
    })
}

/// Extracts the summary text from a successful `generateContent` response.
///
/// A response without candidates yields an empty string; the caller reports
/// that to the user as "no summary produced" rather than as a provider error.
pub(crate) fn response_text(response_json: &Value) -> String {
    response_json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_generate_request_shape() {
        let body = build_generate_request("Summarize it", "https://www.youtube.com/watch?v=abc");

        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["text"], "Summarize it");
        assert_eq!(
            parts[1]["fileData"]["fileUri"],
            "https://www.youtube.com/watch?v=abc"
        );
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["generationConfig"]["maxOutputTokens"],
            MAX_OUTPUT_TOKENS
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "First half. " },
                        { "text": "Second half." }
                    ]
                }
            }]
        });
        assert_eq!(response_text(&response), "First half. Second half.");
    }

    #[test]
    fn test_response_text_empty_when_no_candidates() {
        assert_eq!(response_text(&json!({})), "");
        assert_eq!(response_text(&json!({ "candidates": [] })), "");
    }

    #[tokio::test]
    async fn test_summarize_without_key_is_config_error() {
        let client = GeminiClient::new(None, "gemini-2.0-flash".to_string());

        // Fails before any network call is attempted.
        let err = client
            .summarize("https://www.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ")
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::ConfigError(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
