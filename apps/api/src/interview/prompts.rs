// Question generation prompt and input budgets.

/// Resume characters sent to the model. Longer resumes are cut, not summarized.
pub const MAX_RESUME_CHARS: usize = 1500;
/// Job description characters sent to the model.
pub const MAX_JOB_DESCRIPTION_CHARS: usize = 1000;

/// Keeps the first `max_chars` characters of `text`. Never splits a multi-byte
/// character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Fills the question prompt. Inputs are truncated to their budgets here.
pub fn build_question_prompt(resume_text: &str, job_description_text: &str) -> String {
    let resume = truncate_chars(resume_text, MAX_RESUME_CHARS);
    let job_description = truncate_chars(job_description_text, MAX_JOB_DESCRIPTION_CHARS);

    format!(
        "Based on the following resume and job description, generate 5 distinct interview questions.
Categorize each question as 'Behavioral', 'Technical', or 'Situational'.
Format each question as: Category: Question Text

Resume:
{resume}

Job Description:
{job_description}

Generated Questions:
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_text_is_unchanged() {
        assert_eq!(truncate_chars("short", 1500), "short");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_truncate_to_exact_length() {
        let resume = "a".repeat(2000);
        assert_eq!(truncate_chars(&resume, MAX_RESUME_CHARS).len(), 1500);
        let jd = "b".repeat(1000);
        assert_eq!(truncate_chars(&jd, MAX_JOB_DESCRIPTION_CHARS), jd);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "é".repeat(1200);
        let cut = truncate_chars(&text, MAX_JOB_DESCRIPTION_CHARS);
        assert_eq!(cut.chars().count(), 1000);
        assert_eq!(cut.len(), 2000);
    }

    #[test]
    fn test_prompt_contains_truncated_inputs() {
        let resume = format!("{}{}", "r".repeat(1500), "TAIL_OF_RESUME");
        let jd = format!("{}{}", "j".repeat(1000), "TAIL_OF_JD");
        let prompt = build_question_prompt(&resume, &jd);

        assert!(prompt.contains(&"r".repeat(1500)));
        assert!(prompt.contains(&"j".repeat(1000)));
        assert!(!prompt.contains("TAIL_OF_RESUME"));
        assert!(!prompt.contains("TAIL_OF_JD"));
    }

    #[test]
    fn test_prompt_asks_for_category_format() {
        let prompt = build_question_prompt("Rust dev", "Backend role");
        assert!(prompt.contains("Format each question as: Category: Question Text"));
        assert!(prompt.contains("Resume:\nRust dev\n"));
        assert!(prompt.contains("Job Description:\nBackend role\n"));
    }

    #[test]
    fn test_braces_in_inputs_are_not_template_slots() {
        let prompt = build_question_prompt("{job_description}", "{resume}");
        assert!(prompt.contains("Resume:\n{job_description}\n"));
        assert!(prompt.contains("Job Description:\n{resume}\n"));
    }
}
