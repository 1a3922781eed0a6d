//! Google Gemini `generateContent` wire types.
//!
//! Only the subset the relay needs is modelled:
//! - a request is a list of "contents", each an array of "parts"
//! - a response carries "candidates", each with one content
//!
//! # Example Gemini Request
//! ```json
//! {
//!   "contents": [
//!     { "parts": [{ "text": "Generate a number learning question..." }] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LLMError;

/// Gemini request format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    /// Single user turn holding one text part.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(prompt)],
            }],
        }
    }
}

/// Gemini message/content format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    /// "user" or "model"; omitted on requests, which makes Gemini assume "user"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Gemini content part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl GeminiPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Gemini response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// Gemini response candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    pub content: GeminiContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl GeminiResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Result<&str, LLMError> {
        let candidate = self
            .candidates
            .first()
            .ok_or_else(|| LLMError::MissingContent("no candidates".to_string()))?;
        let part = candidate
            .content
            .parts
            .first()
            .ok_or_else(|| LLMError::MissingContent("candidate has no parts".to_string()))?;
        part.text
            .as_deref()
            .ok_or_else(|| LLMError::MissingContent("first part has no text".to_string()))
    }
}
