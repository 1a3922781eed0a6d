use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use edukit_llm::LLMError;
use serde::Serialize;
use thiserror::Error;

use crate::extraction::ExtractionError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Gemini API error")]
    Upstream { status: u16, body: String },

    #[error("Invalid JSON from Gemini")]
    InvalidModelOutput { raw: String },

    #[error("{0}")]
    Provider(LLMError),

    #[error("Invalid request body: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}

impl From<LLMError> for AppError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::Api { status, body } => AppError::Upstream {
                status: status.as_u16(),
                body,
            },
            other => AppError::Provider(other),
        }
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::InvalidModelOutput { raw: err.raw }
    }
}

#[derive(Serialize)]
struct JsonError<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<&'a str>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        // Every failure, including a bad inbound body, reports as 500
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let (details, raw) = match self {
            AppError::Upstream { body, .. } => (Some(body.as_str()), None),
            AppError::InvalidModelOutput { raw } => (None, Some(raw.as_str())),
            AppError::Provider(_) | AppError::InvalidRequest(_) => (None, None),
        };

        HttpResponse::build(self.status_code()).json(JsonError {
            error: self.to_string(),
            details,
            raw,
        })
    }
}
