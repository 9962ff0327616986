//! User-facing classification of summarizer failures.
//!
//! Maps opaque provider error text onto fixed reply strings by substring
//! match. The matching is best-effort and case-sensitive; it lives behind
//! this one module so a future switch to structured error codes only
//! touches this file.

use crate::errors::BotError;

/// Reply when no Gemini API key is configured.
pub const MISSING_KEY_MESSAGE: &str =
    "The bot is missing its Gemini API key. Please contact the bot administrator.";
/// Reply when the provider rejects the configured key.
pub const INVALID_KEY_MESSAGE: &str =
    "The configured Gemini API key was rejected. Please contact the bot administrator.";
/// Reply when the provider reports quota exhaustion.
pub const QUOTA_MESSAGE: &str =
    "The Gemini API quota has been exceeded. Please try again later.";
/// Reply when the provider blocks the content.
pub const BLOCKED_MESSAGE: &str =
    "Gemini declined to summarize this video (content blocked).";
/// Reply when the provider cannot access the video.
pub const NOT_FOUND_MESSAGE: &str =
    "Gemini could not find that video. It may be private or deleted.";
/// Reply when the provider succeeds but returns no text.
pub const NO_SUMMARY_MESSAGE: &str =
    "Gemini returned an empty summary for this video. Please try again later.";

/// Substring rules applied to error text, in order; first match wins.
const SUBSTRING_RULES: &[(&str, &str)] = &[
    ("API key", INVALID_KEY_MESSAGE),
    ("quota", QUOTA_MESSAGE),
    ("blocked", BLOCKED_MESSAGE),
    ("not found", NOT_FOUND_MESSAGE),
];

/// Converts a summarizer error into the text shown to the user.
///
/// Configuration errors (no credential) short-circuit to the missing-key
/// message; everything else is matched against [`SUBSTRING_RULES`] on the
/// error's display text, falling back to a generic message that embeds it.
#[must_use]
pub fn user_facing_error(err: &BotError) -> String {
    if matches!(err, BotError::ConfigError(_)) {
        return MISSING_KEY_MESSAGE.to_string();
    }

    let text = err.to_string();
    for (needle, message) in SUBSTRING_RULES {
        if text.contains(needle) {
            return (*message).to_string();
        }
    }

    format!("Sorry, I couldn't generate a summary: {text}")
}

/// Collapses a summarizer result into the delivered message text.
///
/// A whitespace-only success is treated as "no summary produced" rather
/// than delivering a blank edit.
#[must_use]
pub fn summary_or_error_text(result: Result<String, BotError>) -> String {
    match result {
        Ok(summary) if summary.trim().is_empty() => NO_SUMMARY_MESSAGE.to_string(),
        Ok(summary) => summary,
        Err(err) => user_facing_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_maps_to_missing_key_message() {
        let err = BotError::ConfigError("GEMINI_API_KEY is not set".to_string());
        assert_eq!(user_facing_error(&err), MISSING_KEY_MESSAGE);
    }

    #[test]
    fn test_substring_rules_in_order() {
        let cases = [
            ("API key not valid. Please pass a valid API key.", INVALID_KEY_MESSAGE),
            ("Resource has been exhausted (e.g. check quota).", QUOTA_MESSAGE),
            ("The prompt was blocked by safety settings.", BLOCKED_MESSAGE),
            ("The requested video was not found.", NOT_FOUND_MESSAGE),
        ];
        for (text, expected) in cases {
            let err = BotError::GeminiError(text.to_string());
            assert_eq!(user_facing_error(&err), expected, "text: {text}");
        }
    }

    #[test]
    fn test_first_match_wins_when_multiple_needles_present() {
        let err = BotError::GeminiError(
            "API key has exceeded its quota for this project".to_string(),
        );
        assert_eq!(user_facing_error(&err), INVALID_KEY_MESSAGE);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let err = BotError::GeminiError("QUOTA limit reached".to_string());
        let text = user_facing_error(&err);
        assert_ne!(text, QUOTA_MESSAGE);
        assert!(text.contains("QUOTA limit reached"));
    }

    #[test]
    fn test_unmatched_error_embeds_its_text() {
        let err = BotError::GeminiError("connection reset by peer".to_string());
        let text = user_facing_error(&err);
        assert!(text.starts_with("Sorry, I couldn't generate a summary:"));
        assert!(text.contains("connection reset by peer"));
    }

    #[test]
    fn test_http_status_error_still_matches_substrings() {
        let err = BotError::GeminiError(
            "Gemini API error (status 429): quota exceeded for requests per minute".to_string(),
        );
        assert_eq!(user_facing_error(&err), QUOTA_MESSAGE);
    }

    #[test]
    fn test_empty_success_maps_to_no_summary_message() {
        assert_eq!(summary_or_error_text(Ok(String::new())), NO_SUMMARY_MESSAGE);
        assert_eq!(
            summary_or_error_text(Ok("  \n\t ".to_string())),
            NO_SUMMARY_MESSAGE
        );
    }

    #[test]
    fn test_successful_summary_passes_through() {
        let summary = "A concise summary with [0:42](url) timestamps.".to_string();
        assert_eq!(summary_or_error_text(Ok(summary.clone())), summary);
    }
}
