use regex::Regex;

/// A YouTube link found in free-form text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLink {
    /// The URL exactly as matched in the input.
    pub raw_url: String,
    /// The 11-character video identifier.
    pub video_id: String,
}

// One shared pattern for every URL shape the bot accepts:
// - youtube.com/watch?v=ID, with other query parameters in any order before v=
// - youtu.be/ID
// - youtube.com/embed/ID
// The video id is always exactly 11 characters of [A-Za-z0-9_-].
static VIDEO_URL_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?(?:[^\s]*&)?v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]{11})",
    )
    .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Returns true when the text contains at least one recognizable video URL.
#[must_use]
pub fn contains_video_link(text: &str) -> bool {
    VIDEO_URL_RE.is_match(text)
}

/// Extracts every video link in the text, in order of appearance.
///
/// Malformed or partial URLs that don't match the pattern are skipped; text
/// with no recognizable link yields an empty vector, never an error.
#[must_use]
pub fn extract_video_links(text: &str) -> Vec<VideoLink> {
    VIDEO_URL_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let raw = caps.get(0)?;
            let id = caps.get(1)?;
            Some(VideoLink {
                raw_url: raw.as_str().to_string(),
                video_id: id.as_str().to_string(),
            })
        })
        .collect()
}

/// Builds the canonical watch URL for a video id.
#[must_use]
pub fn canonical_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}
