//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL, LOG_FILE_NAME};

/// Flushes buffered log lines when dropped. Keep it alive in `main`.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _workers: Vec<WorkerGuard>,
}

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation for the main log
/// - Optional realtime pretty log (truncated on startup, for live monitoring)
/// - Non-blocking writes so the UI thread never waits on disk
/// - Panic hook integration for crash logging
///
/// Returns `None` if the log directory cannot be created or a global
/// subscriber is already installed; the app still runs, unlogged.
pub fn init(config: &DebugConfig) -> Option<LogGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking_main, guard_main) = tracing_appender::non_blocking(file_appender);
    let mut workers = vec![guard_main];

    let env_filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log filter '{}': {}", config.log_level, e);
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    });

    let file_layer = fmt::layer()
        .with_writer(non_blocking_main)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    // Truncate the realtime log so each session starts clean
    let realtime_layer = if config.enable_realtime_log {
        match fs::File::create(config.realtime_log_file()) {
            Ok(file) => {
                let (non_blocking_realtime, guard_realtime) = tracing_appender::non_blocking(file);
                workers.push(guard_realtime);
                Some(
                    fmt::layer()
                        .with_writer(non_blocking_realtime)
                        .with_target(true)
                        .with_thread_names(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_ansi(false)
                        .pretty(),
                )
            }
            Err(e) => {
                eprintln!("Warning: Failed to create realtime log file: {}", e);
                None
            }
        }
    } else {
        None
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(realtime_layer)
        .try_init()
    {
        eprintln!("Warning: Logging already initialized: {}", e);
        return None;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        realtime_log = config.enable_realtime_log,
        "Logging initialized"
    );

    setup_panic_hook();

    Some(LogGuard { _workers: workers })
}

/// Log panics with their location before the default hook runs
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
