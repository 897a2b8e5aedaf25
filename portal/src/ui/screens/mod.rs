//! # Screens
//!
//! One module per screen. Each `render` takes a snapshot of the screen's
//! state and reports interactions to the [`crate::app::App`].

pub mod login;
pub mod signup;

use crate::core::error::AppError;

/// Shown under every password input
pub const PASSWORD_HINT: &str =
    "Must be 8+ chars with uppercase, lowercase, number & special character.";

/// Refused interactions (double submit, stale screen) are expected from the UI
pub(crate) fn log_refused(result: Result<(), AppError>) {
    if let Err(err) = result {
        tracing::debug!(error = %err, "UI interaction refused");
    }
}
