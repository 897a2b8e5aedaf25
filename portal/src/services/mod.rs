//! # Services Module
//!
//! Implementations of the [`crate::core::service`] traits.
//!
//! ```text
//! services/
//! ├── accounts.rs       - DemoAccountService (simulated latency, demo credentials)
//! └── notifications.rs  - TimerPresenter and the shared expiry timer
//! ```
//!
//! The toast-backed presenter lives with the other widgets in
//! [`crate::ui::widgets::notifications`].
//!
//! ## Swapping in a real backend
//!
//! Anything implementing [`crate::core::service::AccountService`] can be
//! passed to [`crate::app::App::new`]; the request/response types in
//! `shared` already derive serde.

pub mod accounts;
pub mod notifications;

pub use accounts::DemoAccountService;
pub use notifications::TimerPresenter;
