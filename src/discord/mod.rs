//! Discord REST API integration

pub mod client;
pub mod commands;

// Re-export main types for convenience
pub use client::DiscordClient;
