//! Slash-command descriptors registered with Discord.

use serde_json::{Value, json};

/// Command name for the static info reply.
pub const ABOUT: &str = "about";
/// Command name for the video-summary flow.
pub const SUMMARIZE: &str = "summarize";
/// Name of the required string option on `summarize`.
pub const URL_OPTION: &str = "url";

/// Application-command type for chat input (slash) commands.
const CHAT_INPUT: u8 = 1;
/// Command-option type for a string value.
const OPTION_STRING: u8 = 3;

/// Builds the bulk-overwrite payload covering both commands.
#[must_use]
pub fn command_descriptors() -> Value {
    json!([
        {
            "name": ABOUT,
            "description": "What this bot does and how to use it",
            "type": CHAT_INPUT
        },
        {
            "name": SUMMARIZE,
            "description": "Summarize a YouTube video with timestamped highlights",
            "type": CHAT_INPUT,
            "options": [{
                "name": URL_OPTION,
                "description": "A YouTube video URL",
                "type": OPTION_STRING,
                "required": true
            }]
        }
    ])
}
