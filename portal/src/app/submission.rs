//! # Submission State Machine
//!
//! Tracks one form's submit attempt:
//!
//! ```text
//! Idle ──submit──▶ Validating ──invalid──▶ Rejected
//!                      │
//!                      └──valid──▶ Submitting ──result──▶ Resolved
//! ```
//!
//! `Rejected` and `Resolved` behave like `Idle` for a new attempt. The submitting flag is
//! true only in `Submitting` and is cleared by [`SubmissionController::resolve`]
//! whatever the result was.

use crate::app::state::{FormModel, TouchedSet};
use crate::core::error::AppError;

/// Shown when a submit attempt fails validation
pub const FORM_ERRORS_MESSAGE: &str = "Please fix form errors.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Submitting,
    Resolved,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionController {
    phase: SubmissionPhase,
}

impl SubmissionController {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Drives the submit button's disabled state and label
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Run the validation gate for a submit attempt.
    ///
    /// Marks every validated field touched, then either moves to `Submitting`
    /// or rejects with [`AppError::Validation`] and stays `Rejected` until
    /// the next attempt.
    /// An attempt while already submitting is refused with [`AppError::State`]
    /// and changes nothing.
    pub fn gate<M: FormModel>(
        &mut self,
        form: &M,
        touched: &mut TouchedSet<M::Field>,
    ) -> Result<(), AppError> {
        if self.is_submitting() {
            return Err(AppError::State("submission already in flight".to_string()));
        }

        self.phase = SubmissionPhase::Validating;
        touched.touch_all();

        if !form.is_valid() {
            self.phase = SubmissionPhase::Rejected;
            tracing::debug!("Submission rejected by validation");
            return Err(AppError::Validation(FORM_ERRORS_MESSAGE.to_string()));
        }

        self.phase = SubmissionPhase::Submitting;
        Ok(())
    }

    /// Record that the account action finished, successfully or not
    pub fn resolve(&mut self) {
        self.phase = SubmissionPhase::Resolved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{LoginField, LoginForm, SignupField, SignupForm};

    fn valid_login() -> LoginForm {
        LoginForm {
            email: "demo@site.com".to_string(),
            password: "Demo@1234".to_string(),
            remember: false,
        }
    }

    #[test]
    fn test_starts_idle() {
        let controller = SubmissionController::default();
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
        assert!(!controller.is_submitting());
    }

    #[test]
    fn test_invalid_form_is_rejected() {
        let mut controller = SubmissionController::default();
        let mut touched = TouchedSet::default();

        let err = controller
            .gate(&SignupForm::default(), &mut touched)
            .expect_err("empty form must not submit");

        assert_eq!(err, AppError::Validation(FORM_ERRORS_MESSAGE.to_string()));
        assert_eq!(controller.phase(), SubmissionPhase::Rejected);
        assert!(!controller.is_submitting());
        // Every field is now touched so the errors show
        for field in [
            SignupField::Name,
            SignupField::Email,
            SignupField::Password,
            SignupField::ConfirmPassword,
        ] {
            assert!(touched.is_touched(field));
        }
    }

    #[test]
    fn test_valid_form_starts_submitting() {
        let mut controller = SubmissionController::default();
        let mut touched = TouchedSet::default();

        assert!(controller.gate(&valid_login(), &mut touched).is_ok());
        assert!(controller.is_submitting());
        assert!(touched.is_touched(LoginField::Email));
        assert!(!touched.is_touched(LoginField::Remember));
    }

    #[test]
    fn test_gate_refuses_while_submitting() {
        let mut controller = SubmissionController::default();
        let mut touched = TouchedSet::default();
        controller.gate(&valid_login(), &mut touched).expect("first attempt");

        let err = controller
            .gate(&valid_login(), &mut touched)
            .expect_err("second attempt while in flight");

        assert!(matches!(err, AppError::State(_)));
        assert!(controller.is_submitting());
    }

    #[test]
    fn test_resolve_clears_flag_and_allows_new_attempt() {
        let mut controller = SubmissionController::default();
        let mut touched = TouchedSet::default();
        controller.gate(&valid_login(), &mut touched).expect("first attempt");

        controller.resolve();
        assert_eq!(controller.phase(), SubmissionPhase::Resolved);
        assert!(!controller.is_submitting());

        assert!(controller.gate(&valid_login(), &mut touched).is_ok());
        assert!(controller.is_submitting());
    }

    #[test]
    fn test_rejected_form_can_be_resubmitted() {
        let mut controller = SubmissionController::default();
        let mut touched = TouchedSet::default();
        let _ = controller.gate(&LoginForm::default(), &mut touched);
        assert_eq!(controller.phase(), SubmissionPhase::Rejected);

        assert!(controller.gate(&valid_login(), &mut touched).is_ok());
        assert_eq!(controller.phase(), SubmissionPhase::Submitting);
    }
}
