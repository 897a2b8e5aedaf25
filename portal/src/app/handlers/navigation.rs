//! # Navigation Handlers
//!
//! Switch the mounted screen.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::{AppState, AuthState, LoginScreen, NavigationRequest, Screen, SignupScreen};
use crate::app::AppContext;

/// Mount a fresh instance of the requested screen.
///
/// The departed screen's state is dropped, including its in-flight
/// submission and notification.
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn navigate(state: Arc<RwLock<AppState>>, ctx: &AppContext, request: NavigationRequest) {
    {
        let mut state = state.write();
        let from = state.current_screen();
        let mount_id = state.next_id();

        state.auth = match request.screen {
            Screen::Signup => AuthState::Signup(SignupScreen::new(
                mount_id,
                ctx.config.signup_notification_lifetime,
            )),
            Screen::Login => AuthState::Login(LoginScreen::new(
                mount_id,
                ctx.config.login_notification_lifetime,
                request.state.clone(),
            )),
        };

        if request.replace {
            state.history.pop();
        }
        state.history.push(request.screen);

        tracing::info!(
            from = from.path(),
            to = request.screen.path(),
            replace = request.replace,
            mount_id,
            "Navigated"
        );
    }

    // Toasts belong to the screen that raised them
    ctx.presenter.dismiss();
}
