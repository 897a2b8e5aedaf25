//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.
//!
//! Every event that belongs to a screen carries the mount id (or notification
//! generation) it was started for, so results arriving after the screen is
//! gone can be dropped.

use shared::AuthResponse;

use crate::app::state::NavigationRequest;
use crate::core::error::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Account creation finished
    SignupResult {
        mount_id: u64,
        /// Email as submitted, carried into the redirect
        email: String,
        result: Result<AuthResponse, AppError>,
    },
    /// Credential check finished
    LoginResult {
        mount_id: u64,
        result: Result<AuthResponse, AppError>,
    },
    /// Deferred navigation is due
    NavigationDue {
        mount_id: u64,
        request: NavigationRequest,
    },
    /// A notification's lifetime elapsed
    NotificationExpired { generation: u64 },
}

impl AppEvent {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::SignupResult { .. } => "signup_result",
            AppEvent::LoginResult { .. } => "login_result",
            AppEvent::NavigationDue { .. } => "navigation_due",
            AppEvent::NotificationExpired { .. } => "notification_expired",
        }
    }
}
