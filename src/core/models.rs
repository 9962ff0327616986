/// Unit of work handed from the synchronous interaction handler to the
/// background summarization task.
#[derive(Debug, Clone)]
pub struct SummarizeTask {
    /// Fresh UUIDv4 minted per invocation, used only for log correlation.
    pub correlation_id: String,
    /// Interaction token addressing the deferred `@original` message.
    pub delivery_token: String,
    /// Raw value of the `url` option as the user typed it.
    pub url_text: String,
}
