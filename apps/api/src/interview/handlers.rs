//! Axum route handlers for question generation.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::interview::generator::generate_questions;
use crate::interview::models::{InterviewQuestion, ProcessedDocuments};
use crate::state::AppState;

/// POST /generate-questions
///
/// Builds questions from resume and job description text. Falls back to a
/// canned list when no model is configured.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(docs): Json<ProcessedDocuments>,
) -> Result<Json<Vec<InterviewQuestion>>, AppError> {
    let questions = generate_questions(state.llm.as_deref(), &docs).await?;
    Ok(Json(questions))
}
