//! # Async Tasks
//!
//! Async task spawning for account actions and delayed navigation.
//! Tasks never touch state directly; they only send [`crate::app::AppEvent`]s.

pub mod auth;
