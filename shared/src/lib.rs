//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the portal UI and the account
//! service it talks to. Today that service is simulated in-process, but every
//! request and response is a plain `serde` type so a real HTTP backend can be
//! dropped in without touching the screens.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::auth`]**: Sign-up and login requests, user info, auth responses
//!   - **[`dto::navigation`]**: State carried between screens on redirect
//! - **[`utils`]**: Shared string helpers
//!   - **[`utils::mask_email`]**: Hide most of an address before logging it
//!   - **[`utils::normalize_email`]**: Trim and lowercase for comparisons
//!
//! ## Wire Format
//!
//! - Auth DTOs use **snake_case** field names (default serde behaviour)
//! - [`NavigationState`] uses **camelCase** (`justSignedUp`) to match the
//!   route state contract
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::SignupRequest;
//! use shared::utils::mask_email;
//!
//! let request = SignupRequest {
//!     name: "Jane Doe".to_string(),
//!     email: "jane@x.com".to_string(),
//!     password: "Abcdef1!".to_string(),
//! };
//!
//! assert_eq!(mask_email(&request.email), "j***@x.com");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
