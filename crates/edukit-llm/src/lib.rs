pub mod error;
pub mod protocol;
pub mod provider;
pub mod providers;

pub use error::LLMError;
pub use protocol::gemini::{
    GeminiCandidate, GeminiContent, GeminiPart, GeminiRequest, GeminiResponse,
};
pub use provider::{Result, TextGenerator};
pub use providers::GeminiProvider;
