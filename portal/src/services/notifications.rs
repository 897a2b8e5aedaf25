//! # Notification Timers
//!
//! Expiry scheduling shared by every presenter, and [`TimerPresenter`], the
//! plain presenter that leaves drawing to the UI.

use std::time::Duration;

use async_channel::Sender;

use crate::app::{AppEvent, Notification};
use crate::core::service::NotificationPresenter;

/// Send [`AppEvent::NotificationExpired`] for `generation` once `lifetime` has passed.
///
/// Fire-and-forget; a stale expiry is filtered out when it is handled.
/// Without a tokio runtime the notification stays until dismissed.
pub fn schedule_expiry(generation: u64, lifetime: Duration, events: Sender<AppEvent>) {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(async move {
                tokio::time::sleep(lifetime).await;
                if events.send(AppEvent::NotificationExpired { generation }).await.is_err() {
                    tracing::debug!(generation, "Event channel closed before notification expired");
                }
            });
        }
        Err(_) => {
            tracing::warn!(generation, "No async runtime, notification will stay until dismissed");
        }
    }
}

/// Timer-only presenter: the UI renders a banner from notification state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerPresenter;

impl NotificationPresenter for TimerPresenter {
    fn present(&self, notification: &Notification, events: &Sender<AppEvent>) {
        schedule_expiry(notification.generation, notification.lifetime, events.clone());
    }

    fn dismiss(&self) {}

    fn draws_from_state(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NotificationKind;

    #[tokio::test(start_paused = true)]
    async fn test_expiry_fires_after_lifetime() {
        let (tx, rx) = async_channel::unbounded();
        let notification = Notification {
            visible: true,
            kind: NotificationKind::Success,
            message: "User created successfully!".to_string(),
            generation: 42,
            lifetime: Duration::from_millis(2000),
        };

        TimerPresenter.present(&notification, &tx);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let event = rx.recv().await.expect("expiry event");
        assert!(matches!(event, AppEvent::NotificationExpired { generation: 42 }));
    }

    #[test]
    fn test_without_runtime_does_not_panic() {
        let (tx, rx) = async_channel::unbounded();
        schedule_expiry(1, Duration::from_millis(10), tx);
        assert!(rx.try_recv().is_err());
        assert!(TimerPresenter.draws_from_state());
    }
}
