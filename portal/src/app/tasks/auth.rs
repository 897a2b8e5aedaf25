//! # Account Tasks
//!
//! Async tasks for account actions and the post-sign-up redirect.

use std::sync::Arc;
use std::time::Duration;

use async_channel::Sender;
use shared::{AuthResponse, LoginRequest, SignupRequest};
use tokio::spawn;
use tokio::task::JoinError;

use crate::app::events::AppEvent;
use crate::app::state::NavigationRequest;
use crate::core::error::AppError;
use crate::core::service::AccountService;

/// Run account creation and report back as [`AppEvent::SignupResult`].
///
/// The call runs in its own task so that a panic still produces a result
/// event and the submitting flag is cleared.
pub(crate) fn create_account(
    accounts: Arc<dyn AccountService>,
    event_tx: Sender<AppEvent>,
    mount_id: u64,
    request: SignupRequest,
) {
    let email = request.email.clone();

    spawn(async move {
        let call = spawn(async move { accounts.create_account(request).await });
        let result = flatten(call.await);

        if event_tx
            .send(AppEvent::SignupResult {
                mount_id,
                email,
                result,
            })
            .await
            .is_err()
        {
            tracing::debug!(mount_id, "Event channel closed, dropping sign-up result");
        }
    });
}

/// Run the credential check and report back as [`AppEvent::LoginResult`].
pub(crate) fn authenticate(
    accounts: Arc<dyn AccountService>,
    event_tx: Sender<AppEvent>,
    mount_id: u64,
    request: LoginRequest,
) {
    spawn(async move {
        let call = spawn(async move { accounts.authenticate(request).await });
        let result = flatten(call.await);

        if event_tx
            .send(AppEvent::LoginResult { mount_id, result })
            .await
            .is_err()
        {
            tracing::debug!(mount_id, "Event channel closed, dropping login result");
        }
    });
}

/// Emit [`AppEvent::NavigationDue`] after `delay`
pub(crate) fn schedule_redirect(
    event_tx: Sender<AppEvent>,
    mount_id: u64,
    request: NavigationRequest,
    delay: Duration,
) {
    spawn(async move {
        tokio::time::sleep(delay).await;
        if event_tx
            .send(AppEvent::NavigationDue { mount_id, request })
            .await
            .is_err()
        {
            tracing::debug!(mount_id, "Event channel closed, dropping redirect");
        }
    });
}

fn flatten(joined: Result<Result<AuthResponse, AppError>, JoinError>) -> Result<AuthResponse, AppError> {
    joined.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Account task failed");
        Err(AppError::Account(format!("account task failed: {}", e)))
    })
}
