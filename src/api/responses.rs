//! Interaction response builders shared across handlers.

use serde_json::{Value, json};

/// Callback type acknowledging a liveness ping.
pub const PONG: u8 = 1;
/// Callback type for an immediate visible message.
pub const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;
/// Callback type for the deferred "thinking" placeholder.
pub const DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 5;

/// Response to a liveness ping.
#[must_use]
pub fn pong() -> Value {
    json!({ "type": PONG })
}

/// Immediate message response with the given content.
#[must_use]
pub fn channel_message(text: &str) -> Value {
    json!({
        "type": CHANNEL_MESSAGE_WITH_SOURCE,
        "data": { "content": text }
    })
}

/// Deferred placeholder response, later edited by the background task.
#[must_use]
pub fn deferred_message() -> Value {
    json!({ "type": DEFERRED_CHANNEL_MESSAGE_WITH_SOURCE })
}
