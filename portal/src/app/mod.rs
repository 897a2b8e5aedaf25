//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI layer, async tasks and
//! application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - applies async results            │   │
//! │  │  - handle_signup_* / handle_login_* - user actions   │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - mounted screen, history, id counter               │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - tasks::auth::create_account / authenticate               │
//! │  - tasks::auth::schedule_redirect                           │
//! │  - services::notifications::schedule_expiry                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: Orchestrator with event handling
//! - **[`AppState`]**: Shared state (see [`state`] module)
//! - **[`AppEvent`]**: Async task results (see [`events`] module)
//! - **[`SubmissionController`]**: Per-form submit state machine (see [`submission`] module)
//! - **[`handlers`]**: User action handlers (auth, navigation, notifications)
//! - **[`tasks`]**: Async background tasks
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use portal::app::{App, SignupField};
//! use portal::config::PortalConfig;
//!
//! let mut app = App::demo(PortalConfig::default());
//!
//! // In the egui update loop:
//! app.on_tick();
//! app.handle_signup_change(SignupField::Name, "Jane Doe").ok();
//! let state = app.state.read();
//! // render from state
//! drop(state);
//! ```
//!
//! **Critical**: Locks are held only for the duration of one handler.

mod event_handler;
mod events;
mod handlers;
mod state;
mod submission;
mod tasks;

pub use event_handler::{LOGIN_SUCCESS_MESSAGE, SIGNUP_SUCCESS_MESSAGE};
pub use events::AppEvent;
pub use state::*;
pub use submission::{SubmissionController, SubmissionPhase, FORM_ERRORS_MESSAGE};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::app::event_handler::AppEventHandler;
use crate::config::PortalConfig;
use crate::core::error::AppError;
use crate::core::service::{AccountService, NotificationPresenter};
use crate::services::{DemoAccountService, TimerPresenter};

/// Collaborators handed to every handler
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) config: PortalConfig,
    pub(crate) accounts: Arc<dyn AccountService>,
    pub(crate) presenter: Arc<dyn NotificationPresenter>,
    pub(crate) event_tx: Sender<AppEvent>,
}

/// Main application orchestrator.
///
/// User actions go through the `handle_*` methods; async results come back
/// through [`App::on_tick`].
pub struct App {
    /// Shared application state.
    ///
    /// - Use `read()` for rendering
    /// - **Critical**: Hold locks for minimal duration to prevent UI freezing
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    ctx: AppContext,
}

impl App {
    /// Create the application with injected services.
    ///
    /// Starts on the login screen. Spawns nothing, so no runtime is needed
    /// until the first submit.
    pub fn new(
        config: PortalConfig,
        accounts: Arc<dyn AccountService>,
        presenter: Arc<dyn NotificationPresenter>,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();
        let state = AppState::new(config.login_notification_lifetime);

        tracing::info!(
            screen = state.current_screen().path(),
            notifier = ?config.notifier,
            "App state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            ctx: AppContext {
                config,
                accounts,
                presenter,
                event_tx,
            },
        }
    }

    /// Demo account service with the timer-only presenter
    pub fn demo(config: PortalConfig) -> Self {
        let accounts = Arc::new(DemoAccountService::from_config(&config));
        Self::new(config, accounts, Arc::new(TimerPresenter))
    }

    pub fn config(&self) -> &PortalConfig {
        &self.ctx.config
    }

    /// Whether the UI should draw the notification banner itself
    pub fn draws_notification_banner(&self) -> bool {
        self.ctx.presenter.draws_from_state()
    }

    pub fn current_screen(&self) -> Screen {
        self.state.read().current_screen()
    }

    /// Called every frame to apply pending async results.
    ///
    /// Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        processed
    }

    /// Apply one async result
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    // ========== Sign-up ==========

    pub fn handle_signup_change(&mut self, field: SignupField, value: impl Into<String>) -> Result<(), AppError> {
        handlers::auth::handle_signup_change(self.state.clone(), field, value.into())
    }

    pub fn handle_signup_blur(&mut self, field: SignupField) -> Result<(), AppError> {
        handlers::auth::handle_signup_blur(self.state.clone(), field)
    }

    /// Flip masking on `Password` or `ConfirmPassword`
    pub fn handle_signup_toggle_visibility(&mut self, field: SignupField) -> Result<(), AppError> {
        handlers::auth::handle_signup_toggle_visibility(self.state.clone(), field)
    }

    /// Submit the sign-up form.
    ///
    /// A rejected form is `Ok`: the outcome is the danger notification.
    /// `Err` means the submit was refused (already submitting, or the
    /// sign-up screen is not mounted).
    pub fn handle_signup_submit(&mut self) -> Result<(), AppError> {
        handlers::auth::handle_signup_submit(self.state.clone(), &self.ctx)
    }

    // ========== Login ==========

    pub fn handle_login_change(&mut self, field: LoginField, value: impl Into<FieldValue>) -> Result<(), AppError> {
        handlers::auth::handle_login_change(self.state.clone(), field, value.into())
    }

    pub fn handle_login_blur(&mut self, field: LoginField) -> Result<(), AppError> {
        handlers::auth::handle_login_blur(self.state.clone(), field)
    }

    pub fn handle_login_toggle_visibility(&mut self) -> Result<(), AppError> {
        handlers::auth::handle_login_toggle_visibility(self.state.clone())
    }

    /// Submit the login form. Same contract as [`App::handle_signup_submit`].
    pub fn handle_login_submit(&mut self) -> Result<(), AppError> {
        handlers::auth::handle_login_submit(self.state.clone(), &self.ctx)
    }

    // ========== Shared ==========

    /// Close the visible notification early
    pub fn dismiss_notification(&mut self) {
        handlers::notifications::dismiss(self.state.clone(), &self.ctx);
    }

    pub fn navigate(&mut self, request: NavigationRequest) {
        handlers::navigation::navigate(self.state.clone(), &self.ctx, request);
    }
}
