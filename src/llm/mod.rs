pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::chat::ChatTurn;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("model endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model returned no usable candidates")]
    EmptyResponse,
}

/// Boundary to the external generative model. The server holds this as a
/// trait object so tests can substitute a fake client.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends `message` as the newest user turn, replaying `history` as
    /// prior context, and returns the raw (unsanitized) reply text.
    async fn send_message(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, LlmError>;
}
