//! Answer validation rules.

use crate::validation::{check_char_length, check_presence, ValidationErrors};

/// Inclusive lower bound on answer body length, in characters.
pub const BODY_MIN_CHARS: usize = 1;
/// Inclusive upper bound on answer body length, in characters.
pub const BODY_MAX_CHARS: usize = 10_000;

pub const NOTICE_CREATED: &str = "Your answer successfully created.";
pub const NOTICE_DELETED: &str = "Your answer successfully deleted.";

/// Answer fields as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerDraft {
    pub body: Option<String>,
}

/// An answer body that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAnswer {
    body: String,
}

impl ValidAnswer {
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl AnswerDraft {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    pub fn validate(&self) -> Result<ValidAnswer, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let body = self.body.as_deref();
        check_presence(&mut errors, "body", "Body", body);
        check_char_length(
            &mut errors,
            "body",
            "Body",
            body,
            BODY_MIN_CHARS,
            BODY_MAX_CHARS,
        );
        errors.into_result()?;

        Ok(ValidAnswer {
            body: self.body.clone().unwrap_or_default(),
        })
    }
}
