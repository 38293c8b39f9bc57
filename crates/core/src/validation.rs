//! Field-level validation primitives shared by the entity rules.
//!
//! Rules collect every failure instead of stopping at the first one so a form
//! can be re-displayed with all of its problems at once.

use std::fmt;

use serde::Serialize;

/// A single failed rule on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// The full set of rule failures for one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether any failure is recorded against `field`.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(())` when nothing failed, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join(", "))
    }
}

/// Absent, empty, and whitespace-only values are all blank.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Record "`{label}` can't be blank" when `value` is blank.
pub fn check_presence(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: Option<&str>,
) {
    if is_blank(value) {
        errors.add(field, format!("{label} can't be blank"));
    }
}

/// Record a length failure when the character count of `value` falls outside
/// `min..=max`. Absent values are left to [`check_presence`].
pub fn check_char_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) {
    let Some(value) = value else {
        return;
    };
    let count = value.chars().count();
    if count < min {
        errors.add(
            field,
            format!("{label} is too short (minimum is {min} characters)"),
        );
    } else if count > max {
        errors.add(
            field,
            format!("{label} is too long (maximum is {max} characters)"),
        );
    }
}
