//! # Utility Functions
//!
//! Shared utility functions used across the portal.
//!
//! ## Modules
//!
//! - **[`validation`]**: Field validators (name, email, password, confirmation)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate string helpers (email masking)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
