//! Background summarize task processing

pub mod deliver;
pub mod handler;

// Re-export the main entrypoint for convenience
pub use handler::run_summarize_task;

/// Canonical failure message shown to users when summarization fails.
pub const CANONICAL_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't generate a summary at this time. Please try again later.";

/// Reply when the background task finds no extractable video link.
pub const EXTRACT_FAILURE_MESSAGE: &str =
    "I couldn't find a YouTube link in that URL. Please double-check it and try again.";
