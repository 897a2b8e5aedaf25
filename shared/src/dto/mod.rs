//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the portal screens and the account
//! service, plus the state handed from one screen to another on redirect.
//!
//! ## Module Organization
//!
//! - [`auth`] - Sign-up, login, and user DTOs
//! - [`navigation`] - Route state carried by screen redirects
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "email": "demo@site.com",
//!   "password": "Demo@1234",
//!   "remember": true
//! }
//! ```
//!
//! ```text
//! {
//!   "user": {
//!     "id": "0d7c...",
//!     "name": "Demo User",
//!     "email": "demo@site.com",
//!     "created_at": "2024-01-01T00:00:00Z"
//!   },
//!   "message": "Logged in successfully!"
//! }
//! ```

pub mod auth;
pub mod navigation;

pub use auth::*;
pub use navigation::*;
