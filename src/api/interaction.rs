//! Typed view of Discord's interaction payload, reduced to the fields the bot
//! reads.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::BotError;

/// The interaction kinds this bot distinguishes.
///
/// Discord's wire value is a number: 1 is a liveness ping, 2 is a slash
/// command. Everything else (component clicks, autocomplete, modals) is
/// lumped into `Other` and answered with a generic reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Ping,
    Command,
    Other,
}

/// One inbound interaction event.
#[derive(Debug, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub interaction_type: u64,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub data: Option<CommandData>,
}

/// The command-specific payload of an application-command interaction.
#[derive(Debug, Deserialize)]
pub struct CommandData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

/// One user-supplied command option.
#[derive(Debug, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl Interaction {
    /// Parses the raw request body into an interaction.
    ///
    /// # Errors
    ///
    /// Returns `BotError::ParseError` when the body is not a JSON interaction
    /// payload.
    pub fn parse(body: &[u8]) -> Result<Self, BotError> {
        serde_json::from_slice(body).map_err(|e| BotError::ParseError(e.to_string()))
    }

    #[must_use]
    pub fn kind(&self) -> InteractionKind {
        match self.interaction_type {
            1 => InteractionKind::Ping,
            2 => InteractionKind::Command,
            _ => InteractionKind::Other,
        }
    }

    /// Name of the invoked command, when present.
    #[must_use]
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.name.as_str())
    }

    /// String value of the named option, when present and a string.
    #[must_use]
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.data
            .as_ref()?
            .options
            .iter()
            .find(|o| o.name == name)?
            .value
            .as_str()
    }
}
