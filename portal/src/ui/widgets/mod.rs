//! # Reusable Widgets
//!
//! - **[`forms`]**: Inputs, password toggle, submit button, links
//! - **[`notifications`]**: Toast presenter and fallback banner

pub mod forms;
pub mod notifications;
