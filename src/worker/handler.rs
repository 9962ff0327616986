//! Background task driving one summarize invocation end to end.

use std::sync::Arc;

use tracing::{error, info};

use super::{CANONICAL_FAILURE_MESSAGE, EXTRACT_FAILURE_MESSAGE, deliver};
use crate::ai::{Summarizer, summary_or_error_text};
use crate::core::models::SummarizeTask;
use crate::discord::DiscordClient;
use crate::utils::links::{canonical_watch_url, extract_video_links};

/// Runs one summarize task to completion: extract, summarize, deliver.
///
/// Spawned on the shared task tracker after the deferred acknowledgment has
/// been sent. The summarize phase runs on its own join handle so a panic in
/// it is caught and delivered as the canonical failure message instead of
/// vanishing with the task.
pub async fn run_summarize_task(
    summarizer: Arc<dyn Summarizer>,
    discord: Arc<DiscordClient>,
    task: SummarizeTask,
) {
    info!(
        "Starting summarize task for input {:?} (corr_id={})",
        task.url_text, task.correlation_id
    );

    let summarize_handle = {
        let summarizer = Arc::clone(&summarizer);
        let url_text = task.url_text.clone();
        let correlation_id = task.correlation_id.clone();
        tokio::spawn(async move { summarize_content(summarizer, &url_text, &correlation_id).await })
    };

    let content = match summarize_handle.await {
        Ok(text) => text,
        Err(e) => {
            error!(
                "Summarize task panicked: {} (corr_id={})",
                e, task.correlation_id
            );
            CANONICAL_FAILURE_MESSAGE.to_string()
        }
    };

    info!("Delivering response (corr_id={})", task.correlation_id);

    if let Err(e) = deliver::deliver_summary(
        &discord,
        &task.delivery_token,
        &content,
        &task.correlation_id,
    )
    .await
    {
        error!(
            "Giving up on delivery: {} (corr_id={})",
            e, task.correlation_id
        );
    }
}

/// Turns the user's input text into the delivered message, success and
/// error alike.
async fn summarize_content(
    summarizer: Arc<dyn Summarizer>,
    url_text: &str,
    correlation_id: &str,
) -> String {
    info!("Extracting video link (corr_id={})", correlation_id);

    let links = extract_video_links(url_text);
    let Some(link) = links.first() else {
        return EXTRACT_FAILURE_MESSAGE.to_string();
    };

    let watch_url = canonical_watch_url(&link.video_id);
    info!(
        "Requesting summary for video {} (corr_id={})",
        link.video_id, correlation_id
    );

    let result = summarizer.summarize(&watch_url, &link.video_id).await;
    summary_or_error_text(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::classify::QUOTA_MESSAGE;
    use crate::errors::BotError;
    use async_trait::async_trait;

    struct EchoSummarizer;

    #[async_trait]
    impl Summarizer for EchoSummarizer {
        async fn summarize(&self, watch_url: &str, _video_id: &str) -> Result<String, BotError> {
            Ok(format!("summary of {watch_url}"))
        }
    }

    struct FailingSummarizer(String);

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(&self, _watch_url: &str, _video_id: &str) -> Result<String, BotError> {
            Err(BotError::GeminiError(self.0.clone()))
        }
    }

    #[tokio::test]
    async fn test_summarize_content_uses_canonical_watch_url() {
        let text = summarize_content(
            Arc::new(EchoSummarizer),
            "check out https://youtu.be/dQw4w9WgXcQ",
            "corr",
        )
        .await;
        assert_eq!(
            text,
            "summary of https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[tokio::test]
    async fn test_summarize_content_without_link_reports_extract_failure() {
        let text = summarize_content(Arc::new(EchoSummarizer), "no link here", "corr").await;
        assert_eq!(text, EXTRACT_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_summarize_content_classifies_provider_errors() {
        let text = summarize_content(
            Arc::new(FailingSummarizer("quota exceeded".to_string())),
            "https://youtu.be/dQw4w9WgXcQ",
            "corr",
        )
        .await;
        assert_eq!(text, QUOTA_MESSAGE);
    }
}
