//! # Common Error Types
//!
//! Consolidated error handling for the portal.
//!
//! Every failure the portal can produce is user-correctable and ends at the UI
//! boundary: it is shown inline or as a notification and logged, never
//! propagated further.
//!
//! ## Error Categories
//!
//! - **Validation**: The form has at least one invalid field
//! - **InvalidCredentials**: Login email/password did not match an account
//! - **Account**: The account service failed for another reason
//! - **State**: An interaction that does not fit the current form state
//! - **Config**: Bad environment configuration at start-up
//!
//! ## Usage Pattern
//!
//! ```rust
//! use portal::core::error::AppError;
//!
//! fn require_checked(value: Option<bool>) -> Result<bool, AppError> {
//!     value.ok_or_else(|| AppError::State("checkbox expects a boolean".to_string()))
//! }
//!
//! assert!(require_checked(None).is_err());
//! ```

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the portal.
///
/// # Example
///
/// ```rust
/// use portal::core::error::AppError;
///
/// let validation_err = AppError::Validation("Please fix form errors.".to_string());
///
/// assert_eq!(AppError::InvalidCredentials.to_string(), "Invalid email or password.");
/// assert_eq!(validation_err.to_string(), "Validation error: Please fix form errors.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// One or more form fields failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Login credentials did not match.
    ///
    /// The display text is shown to the user verbatim.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Account service failure other than a credential mismatch.
    ///
    /// The demo service never produces this; a networked implementation
    /// would use it for transport and server errors.
    #[error("Account error: {0}")]
    Account(String),

    /// Interaction that does not fit the current form state.
    ///
    /// - Checkbox fields given text, text fields given a boolean
    /// - Submitting while a submission is already outstanding
    #[error("State error: {0}")]
    State(String),

    /// Invalid environment configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Whether the user can fix this by editing the form and trying again.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Account("service unavailable".to_string()).to_string(),
            "Account error: service unavailable"
        );
        assert_eq!(
            AppError::State("already submitting".to_string()).to_string(),
            "State error: already submitting"
        );
        assert_eq!(
            AppError::Config("PORTAL_LOGIN_DELAY_MS must be a number".to_string()).to_string(),
            "Configuration error: PORTAL_LOGIN_DELAY_MS must be a number"
        );
    }

    #[test]
    fn test_user_correctable_errors() {
        assert!(AppError::InvalidCredentials.is_user_correctable());
        assert!(AppError::Validation("x".to_string()).is_user_correctable());
        assert!(!AppError::Account("x".to_string()).is_user_correctable());
        assert!(!AppError::Config("x".to_string()).is_user_correctable());
    }
}
