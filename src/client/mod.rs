//! The external completion collaborator: a request/response text-completion
//! service, invoked synchronously or as an ordered stream of text fragments.

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API key not configured: {0}")]
    MissingApiKey(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Empty response from model")]
    EmptyResponse,
}

/// Abstraction over the generative text model.
///
/// Implementations are thin transport wrappers: they carry no retry logic
/// and no knowledge of the response grammar.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Identifier of the underlying model, for provenance.
    fn model(&self) -> &str;

    /// One synchronous completion call.
    async fn complete(&self, prompt: &str) -> Result<String, ClientError>;

    /// Streamed completion: text fragments delivered in arrival order.
    /// The default implementation performs a synchronous call and delivers
    /// the whole response as a single fragment.
    async fn complete_streamed(
        &self,
        prompt: &str,
    ) -> Result<mpsc::Receiver<String>, ClientError> {
        let text = self.complete(prompt).await?;
        let (tx, rx) = mpsc::channel(1);
        // Receiver buffers the fragment even after the sender is dropped.
        let _ = tx.send(text).await;
        Ok(rx)
    }
}
