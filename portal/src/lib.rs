//! # Account Portal - Library Root
//!
//! A native desktop GUI with two form screens: **sign-up** and **login**.
//! This library crate holds everything the binary (`main.rs`) uses, and the
//! whole form model can be driven headless for tests.
//!
//! ## Features
//!
//! - **Field validation**: name, email, password strength and confirmation
//! - **Touched-gated errors**: fields are decorated only after they lose focus
//! - **Submission state machine**: one in-flight submit per form
//! - **Transient notifications**: auto-dismissing toast or banner
//! - **Post-sign-up redirect**: login opens with the new email prefilled
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              portal (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui-notify    - Toast notifications                  │
//! │  Tokio          - Timers for simulated account calls   │
//! │  async-channel  - Task -> UI thread events             │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ AccountService trait
//!          ▼
//! ┌─────────────────────────┐
//! │  DemoAccountService     │
//! │  (simulated latency)    │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, state, submission state machine, handlers, tasks
//! - **config**: Timing and presenter selection from the environment
//! - **core**: Error type and service traits
//! - **debug**: File logging and panic hook
//! - **services**: Demo account service, timer presenter
//! - **ui**: Screens, form widgets, notifications, theme
//! - **utils**: Field validators
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin portal
//! PORTAL_NOTIFIER=timer PORTAL_LOGIN_DELAY_MS=200 cargo run --bin portal
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use portal::app::{App, LoginField, Screen};
//! use portal::config::PortalConfig;
//!
//! let mut app = App::demo(PortalConfig::default());
//! assert_eq!(app.current_screen(), Screen::Login);
//!
//! app.handle_login_change(LoginField::Email, "demo@site.com").unwrap();
//! app.handle_login_blur(LoginField::Email).unwrap();
//! ```
//!
//! The demo account is `demo@site.com` / `Demo@1234`.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use config::PortalConfig;
pub use core::{AppError, Result};
