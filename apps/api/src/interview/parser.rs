//! Turns raw model output into `InterviewQuestion`s.
//!
//! The model is asked for one `Category: Question` per line but does not always
//! comply. Parsing never fails:
//! - blank lines are skipped
//! - a line without a colon becomes a `General` question
//! - a line whose category or question is blank around the first colon is dropped
//! - an unrecognized category becomes `General`
//! - if nothing survives, a single fallback question is returned

use tracing::warn;

use crate::interview::models::{InterviewQuestion, QuestionCategory};

pub const FALLBACK_QUESTION: &str =
    "Could not generate specific questions. Tell me about a time you faced a challenge.";

/// Parses a completion into questions, preserving line order. Always returns at
/// least one question.
pub fn parse_questions(raw: &str) -> Vec<InterviewQuestion> {
    let questions: Vec<InterviewQuestion> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect();

    if questions.is_empty() {
        return vec![fallback_question()];
    }
    questions
}

pub fn fallback_question() -> InterviewQuestion {
    InterviewQuestion::new(FALLBACK_QUESTION, QuestionCategory::Behavioral)
}

fn parse_line(line: &str) -> Option<InterviewQuestion> {
    let Some((category, question)) = line.split_once(':') else {
        warn!("Could not parse line for question: {line}");
        return Some(InterviewQuestion::new(line, QuestionCategory::General));
    };

    let (category, question) = (category.trim(), question.trim());
    if category.is_empty() || question.is_empty() {
        return None;
    }

    let category = QuestionCategory::from_model_label(category).unwrap_or(QuestionCategory::General);
    Some(InterviewQuestion::new(question, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use QuestionCategory::*;

    fn q(question: &str, category: QuestionCategory) -> InterviewQuestion {
        InterviewQuestion::new(question, category)
    }

    #[test]
    fn test_well_formed_lines_keep_categories() {
        let parsed = parse_questions("Behavioral: Tell me about yourself\nTechnical: Explain X");
        assert_eq!(
            parsed,
            vec![q("Tell me about yourself", Behavioral), q("Explain X", Technical)]
        );
    }

    #[test]
    fn test_line_without_colon_is_general() {
        assert_eq!(parse_questions("Not a colon line"), vec![q("Not a colon line", General)]);
    }

    #[test]
    fn test_unknown_category_is_coerced_to_general() {
        assert_eq!(
            parse_questions("Weird: foo\nbar"),
            vec![q("foo", General), q("bar", General)]
        );
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        assert_eq!(
            parse_questions("behavioral: Describe a conflict"),
            vec![q("Describe a conflict", General)]
        );
    }

    #[test]
    fn test_blank_input_gives_fallback() {
        for raw in ["", "   \n  ", "\r\n\r\n"] {
            let parsed = parse_questions(raw);
            assert_eq!(parsed, vec![q(FALLBACK_QUESTION, Behavioral)], "input {raw:?}");
        }
    }

    #[test]
    fn test_lines_with_empty_sides_are_dropped() {
        let parsed = parse_questions("Technical:   \n: orphan question\nSituational: What would you do?");
        assert_eq!(parsed, vec![q("What would you do?", Situational)]);
    }

    #[test]
    fn test_all_lines_dropped_gives_fallback() {
        assert_eq!(parse_questions(":\nTechnical:\n  :  "), vec![fallback_question()]);
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        assert_eq!(
            parse_questions("Technical: Compare A: B and C"),
            vec![q("Compare A: B and C", Technical)]
        );
    }

    #[test]
    fn test_whitespace_around_parts_is_trimmed() {
        assert_eq!(
            parse_questions("   Situational   :   Handle an outage   \r\n"),
            vec![q("Handle an outage", Situational)]
        );
    }

    #[test]
    fn test_order_and_duplicates_are_preserved() {
        let raw = "Technical: B\n\nBehavioral: A\nTechnical: B\nloose line\nGeneral: C";
        let parsed = parse_questions(raw);
        assert_eq!(
            parsed,
            vec![
                q("B", Technical),
                q("A", Behavioral),
                q("B", Technical),
                q("loose line", General),
                q("C", General),
            ]
        );
    }

    #[test]
    fn test_no_limit_on_question_count() {
        let raw: String = (0..25).map(|i| format!("Technical: Question {i}\n")).collect();
        assert_eq!(parse_questions(&raw).len(), 25);
    }

    #[test]
    fn test_reparsing_serialized_output_is_stable() {
        let raw = "Behavioral: Tell me about a failure\n\
                   Technical: What is a lifetime: really?\n\
                   no colon here\n\
                   Nonsense: odd label\n\
                   Situational: A deadline slips";
        let first = parse_questions(raw);
        let serialized = first
            .iter()
            .map(|q| format!("{}: {}", q.category, q.question))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(parse_questions(&serialized), first);
    }

    #[test]
    fn test_typical_model_output_with_preamble() {
        let raw = "Here are 5 questions:\n\n\
                   1. Behavioral: Describe a time you led a team.\n\
                   Technical: How does async work in Rust?";
        // The preamble has nothing after its colon; the numbered label is not exact.
        assert_eq!(
            parse_questions(raw),
            vec![
                q("Describe a time you led a team.", General),
                q("How does async work in Rust?", Technical),
            ]
        );
    }
}
