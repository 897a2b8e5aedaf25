//! Validation utilities for user input
//!
//! Every validator is pure and cheap: the screens call them on every read of
//! the form, with no caching.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters accepted by the password "special character" rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>_-\\/~`+=[];'";

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum trimmed name length, in characters.
pub const MIN_NAME_LENGTH: usize = 2;

// something@something.something, no whitespace
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Error text, or the empty string when valid
    pub fn message(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

/// Validate full name
pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return ValidationResult::err("Please enter your full name.");
    }

    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if !EMAIL_PATTERN.is_match(email) {
        return ValidationResult::err("Please enter a valid email address.");
    }

    ValidationResult::ok()
}

/// Validate password strength
///
/// Rules are checked in order and the first failure wins.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return ValidationResult::err("Password must be at least 8 characters.");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return ValidationResult::err("Include at least one uppercase letter.");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return ValidationResult::err("Include at least one lowercase letter.");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Include at least one number.");
    }

    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return ValidationResult::err("Include at least one special character.");
    }

    ValidationResult::ok()
}

/// Validate password confirmation against the current password
pub fn validate_confirm_password(confirm_password: &str, password: &str) -> ValidationResult {
    if confirm_password != password {
        return ValidationResult::err("Passwords do not match.");
    }

    ValidationResult::ok()
}
