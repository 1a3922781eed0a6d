use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::extraction::extract_questions;
use crate::middleware::extract_trace_id;
use crate::prompt::build_prompt;
use crate::state::AppState;

pub const DEFAULT_MODE: &str = "math";
pub const DEFAULT_GRADE: &str = "1";
pub const DEFAULT_DIFFICULTY: &str = "easy";

/// Inbound body. Every field is optional; `null` counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub grade: Option<Grade>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Grades arrive as either `"2"` or `2`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Grade {
    Text(String),
    Number(serde_json::Number),
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        match grade {
            Grade::Text(text) => text,
            Grade::Number(number) => number.to_string(),
        }
    }
}

impl GenerateRequest {
    /// An empty body is the same as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(body)?)
    }

    fn resolve(self) -> (String, String, String) {
        (
            self.mode.unwrap_or_else(|| DEFAULT_MODE.to_string()),
            self.grade
                .map(String::from)
                .unwrap_or_else(|| DEFAULT_GRADE.to_string()),
            self.difficulty
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub mode: String,
    pub grade: String,
    pub difficulty: String,
    pub questions: Vec<Value>,
}

pub async fn handler(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let trace_id = extract_trace_id(&req).unwrap_or_default();
    let (mode, grade, difficulty) = GenerateRequest::from_body(&body)
        .inspect_err(|e| tracing::warn!("[{}] Rejected request body: {}", trace_id, e))?
        .resolve();

    tracing::info!(
        "[{}] Generating questions: mode='{}', grade='{}', difficulty='{}', model='{}'",
        trace_id,
        mode,
        grade,
        difficulty,
        state.generator.model()
    );

    let prompt = build_prompt(&mode, &grade, &difficulty);

    let text = state.generator.generate(&prompt).await.map_err(|e| {
        tracing::warn!("[{}] Generation failed: {}", trace_id, e);
        AppError::from(e)
    })?;

    let questions = extract_questions(&text).map_err(|e| {
        tracing::warn!("[{}] {}; raw length {}", trace_id, e, e.raw.len());
        AppError::from(e)
    })?;

    tracing::info!("[{}] Returning {} question(s)", trace_id, questions.len());

    Ok(HttpResponse::Ok().json(GenerateResponse {
        mode,
        grade,
        difficulty,
        questions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_defaults() {
        let (mode, grade, difficulty) = GenerateRequest::from_body(b"  \n").unwrap().resolve();
        assert_eq!(mode, "math");
        assert_eq!(grade, "1");
        assert_eq!(difficulty, "easy");
    }

    #[test]
    fn test_nulls_use_defaults() {
        let body = br#"{"mode": null, "grade": null, "difficulty": "hard"}"#;
        let (mode, grade, difficulty) = GenerateRequest::from_body(body).unwrap().resolve();
        assert_eq!(mode, "math");
        assert_eq!(grade, "1");
        assert_eq!(difficulty, "hard");
    }

    #[test]
    fn test_numeric_grade() {
        let body = br#"{"grade": 3}"#;
        let (_, grade, _) = GenerateRequest::from_body(body).unwrap().resolve();
        assert_eq!(grade, "3");
    }

    #[test]
    fn test_mode_is_kept_as_sent() {
        let body = br#"{"mode": "ALPHABET"}"#;
        let (mode, _, _) = GenerateRequest::from_body(body).unwrap().resolve();
        assert_eq!(mode, "ALPHABET");
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(matches!(
            GenerateRequest::from_body(b"{not json"),
            Err(AppError::InvalidRequest(_))
        ));
        assert!(GenerateRequest::from_body(br#"{"grade": [1]}"#).is_err());
    }
}
