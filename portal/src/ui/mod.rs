//! # GUI Rendering
//!
//! Immediate-mode rendering of the mounted screen with **egui widgets**,
//! plus the [`PortalWindow`] that drives the [`App`] from eframe.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::sync::Arc;
use std::time::Duration;

use crate::app::{App, AuthState};
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::{render_banner, ToastPresenter};

/// Repaint cadence while idle, so timer events are applied promptly
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    // Render from a snapshot; handlers take the lock themselves
    let auth = match app.state.try_read() {
        Some(state) => state.auth.clone(),
        None => return,
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.set_max_width(widgets::forms::FIELD_WIDTH + 48.0);

            egui::Frame::new()
                .fill(theme.colors.card)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(24))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| match &auth {
                        AuthState::Signup(screen) => screens::signup::render(ui, screen, app, theme),
                        AuthState::Login(screen) => screens::login::render(ui, screen, app, theme),
                    });
                });
        });
    });

    if app.draws_notification_banner() && render_banner(ctx, auth.notification(), theme) {
        app.dismiss_notification();
    }
}

/// eframe application wrapping the [`App`]
pub struct PortalWindow {
    app: App,
    theme: Theme,
    /// Present when toasts are the active presenter
    toasts: Option<Arc<ToastPresenter>>,
}

impl PortalWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App, toasts: Option<Arc<ToastPresenter>>) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        Self { app, theme, toasts }
    }
}

impl eframe::App for PortalWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let processed = self.app.on_tick();
        if processed > 0 {
            tracing::trace!(processed, "Applied async events");
        }

        render(ctx, &mut self.app, &self.theme);

        if let Some(toasts) = &self.toasts {
            toasts.show(ctx);
        }

        ctx.request_repaint_after(TICK_INTERVAL);
    }
}
