use tracing::{debug, warn};

use crate::errors::AppError;
use crate::interview::models::{InterviewQuestion, ProcessedDocuments, QuestionCategory};
use crate::interview::parser::parse_questions;
use crate::interview::prompts::build_question_prompt;
use crate::llm_client::CompletionModel;

/// Canned questions served when no model is configured. Each is marked so the
/// client can tell it apart from generated output.
pub fn dummy_questions() -> Vec<InterviewQuestion> {
    vec![
        InterviewQuestion::new(
            "Tell me about yourself. (LLM not loaded)",
            QuestionCategory::Behavioral,
        ),
        InterviewQuestion::new(
            "Why are you interested in this role? (LLM not loaded)",
            QuestionCategory::Behavioral,
        ),
        InterviewQuestion::new(
            "What are your key skills for this job? (LLM not loaded)",
            QuestionCategory::Technical,
        ),
    ]
}

/// Generates interview questions for a resume/job description pair.
///
/// Without a model this returns [`dummy_questions`]. With one, a model error is
/// surfaced as `AppError::Llm`; malformed output is not an error.
pub async fn generate_questions(
    llm: Option<&dyn CompletionModel>,
    docs: &ProcessedDocuments,
) -> Result<Vec<InterviewQuestion>, AppError> {
    let Some(llm) = llm else {
        warn!("LLM not available. Returning dummy questions.");
        return Ok(dummy_questions());
    };

    let prompt = build_question_prompt(&docs.resume_text, &docs.job_description_text);
    let raw = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let questions = parse_questions(&raw);
    debug!("Parsed {} questions from {}", questions.len(), llm.name());
    Ok(questions)
}
