//! # Notifications Widget
//!
//! Two ways to put a [`Notification`] on screen:
//!
//! - [`ToastPresenter`]: `egui-notify` toasts that fade and close themselves
//! - [`render_banner`]: a plain banner drawn from state, used with
//!   [`crate::services::TimerPresenter`]

use async_channel::Sender;
use egui::RichText;
use egui_notify::Toasts;
use parking_lot::Mutex;

use crate::app::{AppEvent, Notification, NotificationKind};
use crate::core::service::NotificationPresenter;
use crate::services::notifications::schedule_expiry;
use crate::ui::theme::Theme;

/// Toast-backed presenter
///
/// Closing a toast with its own close button only removes the toast;
/// [`Notification::visible`] stays set until the expiry arrives.
pub struct ToastPresenter {
    toasts: Mutex<Toasts>,
}

impl Default for ToastPresenter {
    fn default() -> Self {
        Self {
            toasts: Mutex::new(Toasts::default()),
        }
    }
}

impl ToastPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render toasts in the UI context; call once per frame
    pub fn show(&self, ctx: &egui::Context) {
        self.toasts.lock().show(ctx);
    }
}

impl NotificationPresenter for ToastPresenter {
    fn present(&self, notification: &Notification, events: &Sender<AppEvent>) {
        {
            let mut toasts = self.toasts.lock();
            // One notification at a time per screen
            toasts.dismiss_all_toasts();
            let toast = match notification.kind {
                NotificationKind::Success => toasts.success(notification.message.clone()),
                NotificationKind::Danger => toasts.error(notification.message.clone()),
            };
            toast.duration(Some(notification.lifetime)).closable(true);
        }

        schedule_expiry(notification.generation, notification.lifetime, events.clone());
    }

    fn dismiss(&self) {
        self.toasts.lock().dismiss_all_toasts();
    }

    fn draws_from_state(&self) -> bool {
        false
    }
}

/// Draw a visible notification as a bottom-right banner.
///
/// Returns `true` when its close control was clicked.
pub fn render_banner(ctx: &egui::Context, notification: &Notification, theme: &Theme) -> bool {
    if !notification.visible {
        return false;
    }

    let fill = match notification.kind {
        NotificationKind::Success => theme.success,
        NotificationKind::Danger => theme.error,
    };

    egui::Area::new(egui::Id::new("portal_notification_banner"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(fill)
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::symmetric(14, 10))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&notification.message).color(egui::Color32::WHITE));
                        ui.add_space(12.0);
                        ui.button(RichText::new("✕").color(egui::Color32::WHITE))
                            .on_hover_text("Close")
                            .clicked()
                    })
                    .inner
                })
                .inner
        })
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn danger(generation: u64) -> Notification {
        Notification {
            visible: true,
            kind: NotificationKind::Danger,
            message: "Invalid email or password.".to_string(),
            generation,
            lifetime: Duration::from_millis(2200),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_presenter_arms_state_expiry() {
        let presenter = ToastPresenter::new();
        let (tx, rx) = async_channel::unbounded();

        presenter.present(&danger(7), &tx);
        presenter.present(&danger(8), &tx);

        let first = rx.recv().await.expect("expiry");
        let second = rx.recv().await.expect("expiry");
        assert!(matches!(first, AppEvent::NotificationExpired { generation: 7 }));
        assert!(matches!(second, AppEvent::NotificationExpired { generation: 8 }));
        assert!(!presenter.draws_from_state());
    }

    #[test]
    fn test_hidden_banner_is_not_drawn() {
        let ctx = egui::Context::default();
        let theme = Theme::default();
        let mut closed = true;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            closed = render_banner(ctx, &Notification::hidden(Duration::from_millis(2000)), &theme);
        });

        assert!(!closed);
    }
}
