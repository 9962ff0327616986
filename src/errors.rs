use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to parse interaction payload: {0}")]
    ParseError(String),

    #[error("Failed to access Discord API: {0}")]
    DiscordError(String),

    #[error("Failed to access Gemini API: {0}")]
    GeminiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for BotError {
    fn from(error: anyhow::Error) -> Self {
        BotError::DiscordError(error.to_string())
    }
}

impl From<serde_json::Error> for BotError {
    fn from(error: serde_json::Error) -> Self {
        BotError::ParseError(error.to_string())
    }
}
