use std::sync::Arc;

use portal::config::NotifierKind;
use portal::core::service::{AccountService, NotificationPresenter};
use portal::services::{DemoAccountService, TimerPresenter};
use portal::ui::widgets::notifications::ToastPresenter;
use portal::ui::PortalWindow;
use portal::{App, PortalConfig};

const APP_TITLE: &str = "Account Portal";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _log_guard = portal::debug::init();

    let config = match PortalConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, using defaults");
            PortalConfig::default()
        }
    };
    tracing::info!(?config, debug_mode = portal::debug::is_debug_mode(), "Starting portal");

    // Timers and simulated account calls run here; the UI stays on the main thread
    let runtime = tokio::runtime::Runtime::new()?;
    let _enter = runtime.enter();

    let accounts: Arc<dyn AccountService> = Arc::new(DemoAccountService::from_config(&config));
    let toasts = match config.notifier {
        NotifierKind::Toast => Some(Arc::new(ToastPresenter::new())),
        NotifierKind::Timer => None,
    };
    let presenter: Arc<dyn NotificationPresenter> = match &toasts {
        Some(toasts) => toasts.clone(),
        None => Arc::new(TimerPresenter),
    };

    let app = App::new(config, accounts, presenter);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([480.0, 760.0])
            .with_min_inner_size([400.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(PortalWindow::new(cc, app, toasts)))),
    )?;

    tracing::info!("Portal closed");
    Ok(())
}
