//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits (`AccountService`, `NotificationPresenter`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use portal::core::service::{AccountService, NotificationPresenter};
//!
//! // In production: simulated accounts, toast widget
//! let accounts: Arc<dyn AccountService> = Arc::new(DemoAccountService::from_config(&config));
//!
//! // In tests: recording fakes
//! let accounts: Arc<dyn AccountService> = Arc::new(RecordingAccounts::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{AccountService, NotificationPresenter};
