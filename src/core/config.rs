use std::env;

/// Default Gemini model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Default bind address used when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_public_key: String,
    pub discord_token: String,
    pub discord_application_id: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            discord_public_key: env::var("DISCORD_PUBLIC_KEY")
                .map_err(|e| format!("DISCORD_PUBLIC_KEY: {}", e))?,
            discord_token: env::var("DISCORD_TOKEN")
                .map_err(|e| format!("DISCORD_TOKEN: {}", e))?,
            discord_application_id: env::var("DISCORD_APPLICATION_ID")
                .map_err(|e| format!("DISCORD_APPLICATION_ID: {}", e))?,
            // Absence is reported to the user at request time, not a startup failure.
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            gemini_model: env::var("GEMINI_MODEL").ok(),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }

    /// Model identifier to request from Gemini.
    #[must_use]
    pub fn model(&self) -> &str {
        self.gemini_model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }
}
