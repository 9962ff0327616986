/// Character budget requested from the model for the whole summary.
///
/// Below Discord's 2000-character message limit, leaving headroom so a
/// well-behaved response is delivered untruncated.
pub const MAX_SUMMARY_CHARS: usize = 1800;

/// Builds the fixed instruction prompt for one video.
///
/// Timestamps are requested as `{watch_url}&t=<seconds>` links, which Discord
/// renders as clickable jump points into the video.
#[must_use]
pub fn build_summary_prompt(watch_url: &str) -> String {
    format!(
        "Summarize the video at {watch_url}.\n\
         \n\
         Rules:\n\
         - Start with one sentence saying what the video is about.\n\
         - Follow with the key moments as short hyphen bullets, in order.\n\
         - End each bullet with a timestamp link of the form {watch_url}&t=<seconds>, \
           where <seconds> is that moment's offset into the video in whole seconds.\n\
         - Keep the entire summary under {MAX_SUMMARY_CHARS} characters.\n\
         - Plain text only: no headings, no bold, no tables, no code blocks."
    )
}
