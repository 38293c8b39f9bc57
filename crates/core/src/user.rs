//! Account credential rules used by registration.

use std::sync::LazyLock;

use regex::Regex;

use crate::validation::{check_char_length, check_presence, ValidationErrors};

pub const PASSWORD_MIN_CHARS: usize = 6;
pub const PASSWORD_MAX_CHARS: usize = 128;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid regex"));

/// Canonical form used for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate a registration request.
///
/// `email` is expected to be normalized already.
pub fn validate_registration(
    email: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_presence(&mut errors, "email", "Email", Some(email));
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        errors.add("email", "Email is invalid");
    }

    check_presence(&mut errors, "password", "Password", Some(password));
    if !password.is_empty() {
        check_char_length(
            &mut errors,
            "password",
            "Password",
            Some(password),
            PASSWORD_MIN_CHARS,
            PASSWORD_MAX_CHARS,
        );
    }
    if password != password_confirmation {
        errors.add(
            "password_confirmation",
            "Password confirmation doesn't match Password",
        );
    }

    errors.into_result()
}
