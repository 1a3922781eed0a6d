use async_trait::async_trait;

pub use crate::error::LLMError;

pub type Result<T> = std::result::Result<T, LLMError>;

/// A single-shot text generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` as one user turn and return the text of the first candidate.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
