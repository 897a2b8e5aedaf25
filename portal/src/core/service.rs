//! # Service Traits
//!
//! Traits for dependency injection. The screens never embed credentials or
//! widget runtimes directly; they talk to these capabilities, which are
//! chosen once when the [`crate::app::App`] is built.

use async_channel::Sender;
use async_trait::async_trait;
use shared::{AuthResponse, LoginRequest, SignupRequest};

use crate::app::{AppEvent, Notification};
use crate::core::error::AppError;

/// Account actions invoked by the submission flow.
///
/// Implementations:
/// - [`crate::services::accounts::DemoAccountService`]: simulated delays and fixed demo credentials
/// - test fakes that record calls
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a new account.
    async fn create_account(&self, request: SignupRequest) -> Result<AuthResponse, AppError>;

    /// Check credentials.
    ///
    /// Returns [`AppError::InvalidCredentials`] when email/password do not match.
    async fn authenticate(&self, request: LoginRequest) -> Result<AuthResponse, AppError>;
}

/// Surfaces notifications and arranges for them to expire.
///
/// Implementations:
/// - [`crate::services::notifications::TimerPresenter`]: plain timer-based hide, UI draws a banner
/// - [`crate::ui::widgets::notifications::ToastPresenter`]: rich toast widget
pub trait NotificationPresenter: Send + Sync {
    /// Hand a freshly shown notification to the presenter.
    ///
    /// Must arrange for [`AppEvent::NotificationExpired`] carrying the
    /// notification's generation to be sent after its lifetime.
    fn present(&self, notification: &Notification, events: &Sender<AppEvent>);

    /// Remove whatever is currently on screen.
    fn dismiss(&self);

    /// Whether the UI should draw the notification itself from state.
    fn draws_from_state(&self) -> bool;
}
