//! # Authentication Handlers
//!
//! Field interaction and submit handlers for the sign-up and login screens.
//!
//! Each handler acts on the mounted screen only; calling a sign-up handler
//! while login is mounted returns [`AppError::State`].

use std::sync::Arc;

use parking_lot::RwLock;
use shared::mask_email;

use crate::app::handlers::notifications;
use crate::app::state::{AppState, AuthState, FieldValue, FormField, LoginField, NotificationKind, Screen, SignupField};
use crate::app::tasks;
use crate::app::AppContext;
use crate::core::error::AppError;

fn not_mounted(screen: Screen) -> AppError {
    AppError::State(format!("{} screen is not mounted", screen.path()))
}

// ========== Sign-up ==========

/// Internal handler function - use [`crate::app::App::handle_signup_change`] instead.
pub(crate) fn handle_signup_change(
    state: Arc<RwLock<AppState>>,
    field: SignupField,
    value: String,
) -> Result<(), AppError> {
    let mut state = state.write();
    let AuthState::Signup(screen) = &mut state.auth else {
        return Err(not_mounted(Screen::Signup));
    };

    screen.form.set(field, value);
    tracing::trace!(field = field.name(), "Sign-up field changed");
    Ok(())
}

/// Internal handler function - use [`crate::app::App::handle_signup_blur`] instead.
pub(crate) fn handle_signup_blur(state: Arc<RwLock<AppState>>, field: SignupField) -> Result<(), AppError> {
    let mut state = state.write();
    let AuthState::Signup(screen) = &mut state.auth else {
        return Err(not_mounted(Screen::Signup));
    };

    if screen.touched.touch(field) {
        tracing::debug!(field = field.name(), "Sign-up field touched");
    }
    Ok(())
}

/// Internal handler function - use [`crate::app::App::handle_signup_toggle_visibility`] instead.
pub(crate) fn handle_signup_toggle_visibility(
    state: Arc<RwLock<AppState>>,
    field: SignupField,
) -> Result<(), AppError> {
    let mut state = state.write();
    let AuthState::Signup(screen) = &mut state.auth else {
        return Err(not_mounted(Screen::Signup));
    };

    match screen.visibility_mut(field) {
        Some(visibility) => {
            visibility.toggle();
            Ok(())
        }
        None => Err(AppError::State(format!(
            "field '{}' has no visibility toggle",
            field.name()
        ))),
    }
}

/// Handle sign-up submit
///
/// Invalid forms get a danger notification and never reach the account
/// service. A submit while one is in flight is refused.
///
/// Internal handler function - use [`crate::app::App::handle_signup_submit`] instead.
pub(crate) fn handle_signup_submit(state: Arc<RwLock<AppState>>, ctx: &AppContext) -> Result<(), AppError> {
    let gate = {
        let mut guard = state.write();
        let AuthState::Signup(screen) = &mut guard.auth else {
            return Err(not_mounted(Screen::Signup));
        };
        screen
            .submission
            .gate(&screen.form, &mut screen.touched)
            .map(|()| (screen.mount_id, screen.form.to_request()))
    };

    match gate {
        Ok((mount_id, request)) => {
            tracing::info!(mount_id, email = %mask_email(&request.email), "Submitting sign-up");
            tasks::auth::create_account(ctx.accounts.clone(), ctx.event_tx.clone(), mount_id, request);
            Ok(())
        }
        Err(AppError::Validation(message)) => {
            tracing::warn!("Sign-up rejected: form has errors");
            notifications::show(state, ctx, NotificationKind::Danger, message);
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, "Sign-up submit ignored");
            Err(err)
        }
    }
}

// ========== Login ==========

/// Internal handler function - use [`crate::app::App::handle_login_change`] instead.
pub(crate) fn handle_login_change(
    state: Arc<RwLock<AppState>>,
    field: LoginField,
    value: FieldValue,
) -> Result<(), AppError> {
    let mut state = state.write();
    let AuthState::Login(screen) = &mut state.auth else {
        return Err(not_mounted(Screen::Login));
    };

    if let Err(err) = screen.form.set(field, value) {
        tracing::warn!(field = field.name(), error = %err, "Rejected login field change");
        return Err(err);
    }
    tracing::trace!(field = field.name(), "Login field changed");
    Ok(())
}

/// Internal handler function - use [`crate::app::App::handle_login_blur`] instead.
pub(crate) fn handle_login_blur(state: Arc<RwLock<AppState>>, field: LoginField) -> Result<(), AppError> {
    let mut state = state.write();
    let AuthState::Login(screen) = &mut state.auth else {
        return Err(not_mounted(Screen::Login));
    };

    if screen.touched.touch(field) {
        tracing::debug!(field = field.name(), "Login field touched");
    }
    Ok(())
}

/// Internal handler function - use [`crate::app::App::handle_login_toggle_visibility`] instead.
pub(crate) fn handle_login_toggle_visibility(state: Arc<RwLock<AppState>>) -> Result<(), AppError> {
    let mut state = state.write();
    let AuthState::Login(screen) = &mut state.auth else {
        return Err(not_mounted(Screen::Login));
    };

    screen.password_visibility.toggle();
    Ok(())
}

/// Handle login submit
///
/// Internal handler function - use [`crate::app::App::handle_login_submit`] instead.
pub(crate) fn handle_login_submit(state: Arc<RwLock<AppState>>, ctx: &AppContext) -> Result<(), AppError> {
    let gate = {
        let mut guard = state.write();
        let AuthState::Login(screen) = &mut guard.auth else {
            return Err(not_mounted(Screen::Login));
        };
        screen
            .submission
            .gate(&screen.form, &mut screen.touched)
            .map(|()| (screen.mount_id, screen.form.to_request()))
    };

    match gate {
        Ok((mount_id, request)) => {
            tracing::info!(
                mount_id,
                email = %mask_email(&request.email),
                remember = request.remember,
                "Submitting login"
            );
            tasks::auth::authenticate(ctx.accounts.clone(), ctx.event_tx.clone(), mount_id, request);
            Ok(())
        }
        Err(AppError::Validation(message)) => {
            tracing::warn!("Login rejected: form has errors");
            notifications::show(state, ctx, NotificationKind::Danger, message);
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, "Login submit ignored");
            Err(err)
        }
    }
}
