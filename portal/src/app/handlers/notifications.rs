//! # Notification Handlers
//!
//! Show, dismiss and expire the mounted screen's notification.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::{AppState, NotificationKind};
use crate::app::AppContext;

/// Show a notification on the mounted screen, replacing any visible one.
///
/// Internal handler function, called from the submission flow.
pub(crate) fn show(
    state: Arc<RwLock<AppState>>,
    ctx: &AppContext,
    kind: NotificationKind,
    message: impl Into<String>,
) {
    let notification = {
        let mut state = state.write();
        let generation = state.next_id();
        let notification = state.auth.notification_mut();
        notification.visible = true;
        notification.kind = kind;
        notification.message = message.into();
        notification.generation = generation;
        notification.clone()
    };

    tracing::info!(
        generation = notification.generation,
        kind = ?notification.kind,
        message = %notification.message,
        "Notification shown"
    );

    // Presented outside the state lock
    ctx.presenter.present(&notification, &ctx.event_tx);
}

/// Hide the notification early (close control)
///
/// Internal handler function - use [`crate::app::App::dismiss_notification`] instead.
pub(crate) fn dismiss(state: Arc<RwLock<AppState>>, ctx: &AppContext) {
    state.write().auth.notification_mut().visible = false;
    ctx.presenter.dismiss();
    tracing::debug!("Notification dismissed");
}

/// Apply an expiry. Returns `false` when the expiry is stale.
pub(crate) fn expire(state: Arc<RwLock<AppState>>, generation: u64) -> bool {
    let mut state = state.write();
    let notification = state.auth.notification_mut();

    if notification.generation != generation {
        tracing::debug!(
            generation,
            current = notification.generation,
            "Ignoring stale notification expiry"
        );
        return false;
    }

    notification.visible = false;
    true
}
