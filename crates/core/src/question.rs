//! Question validation rules and the notices shown around question writes.

use crate::validation::{check_presence, ValidationErrors};

pub const NOTICE_CREATED: &str = "Your question successfully created.";
pub const NOTICE_UPDATED: &str = "Question was successfully update!";
pub const NOTICE_INVALID: &str = "You fill invalid data!";

/// Question fields as submitted, before validation.
///
/// `None` means the value was missing or explicitly null; both are blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// A question whose title and body have passed validation.
///
/// Only this type reaches the store, so an invalid question cannot be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidQuestion {
    title: String,
    body: String,
}

impl ValidQuestion {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl QuestionDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }

    /// Check every rule and return the validated question or all failures.
    pub fn validate(&self) -> Result<ValidQuestion, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_presence(&mut errors, "title", "Title", self.title.as_deref());
        check_presence(&mut errors, "body", "Body", self.body.as_deref());
        errors.into_result()?;

        Ok(ValidQuestion {
            title: self.title.clone().unwrap_or_default(),
            body: self.body.clone().unwrap_or_default(),
        })
    }
}
