//! # Event Handler
//!
//! Applies async results from background tasks to application state.
//!
//! Results for a screen that has since been navigated away from are dropped:
//! every event carries the mount id (or notification generation) it was
//! started for.

use shared::{mask_email, AuthResponse, NavigationState};

use crate::app::{handlers, tasks};
use crate::app::state::{AuthState, NavigationRequest, NotificationKind, Screen};
use crate::app::{App, AppEvent};
use crate::core::error::AppError;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "User created successfully!";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully!";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per event, for the duration of one handler.
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::trace!(event = event.kind(), "Handling event");

        match event {
            AppEvent::SignupResult {
                mount_id,
                email,
                result,
            } => {
                self.handle_signup_result(mount_id, email, result);
            }
            AppEvent::LoginResult { mount_id, result } => {
                self.handle_login_result(mount_id, result);
            }
            AppEvent::NavigationDue { mount_id, request } => {
                self.handle_navigation_due(mount_id, request);
            }
            AppEvent::NotificationExpired { generation } => {
                handlers::notifications::expire(self.state.clone(), generation);
            }
        }
    }
}

impl App {
    fn handle_signup_result(&mut self, mount_id: u64, email: String, result: Result<AuthResponse, AppError>) {
        let resolved = {
            let mut state = self.state.write();
            match &mut state.auth {
                AuthState::Signup(screen) if screen.mount_id == mount_id => {
                    screen.submission.resolve();
                    true
                }
                _ => false,
            }
        };
        if !resolved {
            tracing::warn!(mount_id, "Dropping sign-up result for an unmounted screen");
            return;
        }

        match result {
            Ok(response) => {
                tracing::info!(
                    user_id = %response.user.id,
                    email = %mask_email(&email),
                    "Sign-up succeeded"
                );
                handlers::notifications::show(
                    self.state.clone(),
                    &self.ctx,
                    NotificationKind::Success,
                    SIGNUP_SUCCESS_MESSAGE,
                );
                self.schedule_login_redirect(mount_id, email);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sign-up failed");
                handlers::notifications::show(
                    self.state.clone(),
                    &self.ctx,
                    NotificationKind::Danger,
                    err.to_string(),
                );
            }
        }
    }

    fn handle_login_result(&mut self, mount_id: u64, result: Result<AuthResponse, AppError>) {
        let resolved = {
            let mut state = self.state.write();
            match &mut state.auth {
                AuthState::Login(screen) if screen.mount_id == mount_id => {
                    screen.submission.resolve();
                    true
                }
                _ => false,
            }
        };
        if !resolved {
            tracing::warn!(mount_id, "Dropping login result for an unmounted screen");
            return;
        }

        // Login success stays on the screen; there is no signed-in area yet
        let (kind, message) = match result {
            Ok(response) => {
                tracing::info!(user_id = %response.user.id, "Login succeeded");
                (NotificationKind::Success, LOGIN_SUCCESS_MESSAGE.to_string())
            }
            Err(err) if err.is_user_correctable() => {
                tracing::info!(error = %err, "Login refused");
                (NotificationKind::Danger, err.to_string())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Login failed");
                (NotificationKind::Danger, err.to_string())
            }
        };
        handlers::notifications::show(self.state.clone(), &self.ctx, kind, message);
    }

    fn handle_navigation_due(&mut self, mount_id: u64, request: NavigationRequest) {
        if self.state.read().auth.mount_id() != mount_id {
            tracing::warn!(mount_id, to = request.screen.path(), "Dropping redirect for an unmounted screen");
            return;
        }
        handlers::navigation::navigate(self.state.clone(), &self.ctx, request);
    }

    /// Arm the post-sign-up redirect to login
    fn schedule_login_redirect(&self, mount_id: u64, email: String) {
        let request = NavigationRequest::replace(Screen::Login, NavigationState::after_signup(email));
        tasks::auth::schedule_redirect(
            self.ctx.event_tx.clone(),
            mount_id,
            request,
            self.ctx.config.redirect_delay,
        );
    }
}
