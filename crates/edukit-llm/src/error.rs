pub use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The provider answered with a non-success status. `body` is kept verbatim
    /// so callers can surface it.
    #[error("API error: HTTP {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Missing content in provider response: {0}")]
    MissingContent(String),
}
