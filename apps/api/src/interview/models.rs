use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of question labels. Model output is never passed through raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionCategory {
    Behavioral,
    Technical,
    Situational,
    General,
}

impl QuestionCategory {
    /// Maps a label the model is asked to produce. Exact, case-sensitive match on
    /// the three requested categories only; `"General"` and `"behavioral"` both
    /// return `None`.
    pub fn from_model_label(label: &str) -> Option<Self> {
        match label {
            "Behavioral" => Some(QuestionCategory::Behavioral),
            "Technical" => Some(QuestionCategory::Technical),
            "Situational" => Some(QuestionCategory::Situational),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionCategory::Behavioral => "Behavioral",
            QuestionCategory::Technical => "Technical",
            QuestionCategory::Situational => "Situational",
            QuestionCategory::General => "General",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub category: QuestionCategory,
}

impl InterviewQuestion {
    pub fn new(question: impl Into<String>, category: QuestionCategory) -> Self {
        Self {
            question: question.into(),
            category,
        }
    }
}

/// Resume and job description text after upload. Returned by `/upload` and
/// sent back by the client to `/generate-questions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocuments {
    pub resume_text: String,
    pub job_description_text: String,
    #[serde(default)]
    pub message: String,
}
