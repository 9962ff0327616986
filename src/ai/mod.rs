//! All AI/Gemini functionality

pub mod classify;
pub mod client;

// Re-export main types for convenience
pub use classify::summary_or_error_text;
pub use client::{GeminiClient, Summarizer};
