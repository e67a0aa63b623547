use serde::Serialize;

use super::models::SubmitQuestion;

pub const USER_NAME_MAX: usize = 50;
pub const QUESTION_MIN: usize = 10;
pub const QUESTION_MAX: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub path: Vec<String>,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: &str) -> Self {
        Self {
            path: vec![field.to_string()],
            message: message.to_string(),
        }
    }
}

/// Checks field lengths (in characters). Returns every violation, not just the first.
pub fn validate(body: &SubmitQuestion) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name_len = body.user_name.chars().count();
    if name_len < 1 {
        violations.push(FieldViolation::new("userName", "Name is required"));
    } else if name_len > USER_NAME_MAX {
        violations.push(FieldViolation::new("userName", "Name too long"));
    }

    let question_len = body.question.chars().count();
    if question_len < QUESTION_MIN {
        violations.push(FieldViolation::new(
            "question",
            "Question must be at least 10 characters",
        ));
    } else if question_len > QUESTION_MAX {
        violations.push(FieldViolation::new("question", "Question too long"));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
