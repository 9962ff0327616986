//! Follow-up delivery of the summarize result.

use tracing::{error, info};

use crate::discord::DiscordClient;
use crate::errors::BotError;

/// Degraded payload sent on the single delivery retry.
pub const DEGRADED_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't deliver the summary. Please try again.";

/// Edits the original interaction response with `content`.
///
/// On failure, retries exactly once with a static failure notice instead of
/// the original content. An error from this function means both attempts
/// failed and the caller should give up.
///
/// # Errors
///
/// Returns the retry's error when neither write succeeds.
pub async fn deliver_summary(
    discord: &DiscordClient,
    delivery_token: &str,
    content: &str,
    correlation_id: &str,
) -> Result<(), BotError> {
    if let Err(e) = discord.edit_original_response(delivery_token, content).await {
        error!(
            "Failed to deliver summary, retrying with failure notice: {} (corr_id={})",
            e, correlation_id
        );
        discord
            .edit_original_response(delivery_token, DEGRADED_FAILURE_MESSAGE)
            .await?;
        info!("Delivered failure notice (corr_id={})", correlation_id);
        return Ok(());
    }

    info!("Delivered summary response (corr_id={})", correlation_id);
    Ok(())
}
