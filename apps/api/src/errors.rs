use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::documents::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Document(#[from] ExtractError),

    #[error("Job description cannot be empty.")]
    EmptyJobDescription,

    #[error("Could not save resume file: {0}")]
    Storage(String),

    #[error("Failed to generate questions using LLM: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Document(ExtractError::UnsupportedFileType(_)) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_FILE_TYPE",
                "Unsupported file type. Please upload PDF, DOCX, DOC or TXT.".to_string(),
            ),
            AppError::Document(e @ ExtractError::EmptyDocument) => {
                (StatusCode::BAD_REQUEST, "EMPTY_DOCUMENT", e.to_string())
            }
            AppError::Document(e @ ExtractError::ExtractionFailed { .. }) => {
                tracing::error!("Extraction error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "EXTRACTION_FAILED", e.to_string())
            }
            AppError::EmptyJobDescription => (
                StatusCode::BAD_REQUEST,
                "EMPTY_JOB_DESCRIPTION",
                self.to_string(),
            ),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", self.to_string())
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "LLM_ERROR", self.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        // `detail` mirrors `error.message` for clients that read the flat field.
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            },
            "detail": message
        }));

        (status, body).into_response()
    }
}
