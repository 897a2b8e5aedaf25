//! # Logging Infrastructure
//!
//! File-based structured logging for the portal.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/portal.log` (daily rotation)
//! - **Realtime log**: Optional pretty log truncated on each start
//! - **Panic logging**: Panics are written to the log before the default hook runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup and keep the guard alive
//! let _log_guard = portal::debug::init();
//!
//! tracing::info!(screen = "/login", "Navigated");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `portal=info,warn`)
//! - `PORTAL_LOG_DIR`: Log directory (default `logs`)
//! - `PORTAL_DEBUG_REALTIME`: Enable the realtime log (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::LogGuard;

/// Initialize logging from the environment
///
/// Call this at application startup, before any other operations.
pub fn init() -> Option<LogGuard> {
    logger::init(&DebugConfig::from_env())
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
