//! # Shared Utility Functions
//!
//! String helpers used by the portal and by any future backend.
//!
//! ## Email Helpers
//!
//! - [`mask_email`] - Hide the local part of an address before it reaches a log file
//! - [`normalize_email`] - Trim and lowercase an address for comparisons
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{mask_email, normalize_email};
//!
//! assert_eq!(mask_email("demo@site.com"), "d***@site.com");
//! assert_eq!(normalize_email("  Demo@Site.COM "), "demo@site.com");
//! ```

/// Mask the local part of an email address, keeping its first character.
///
/// Input without an `@` is masked entirely, since it may be a typo'd secret.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_email;
///
/// assert_eq!(mask_email("jane@x.com"), "j***@x.com");
/// assert_eq!(mask_email("@x.com"), "***@x.com");
/// assert_eq!(mask_email("not-an-email"), "***");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

/// Normalize an email address for case-insensitive comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("demo@site.com"), "d***@site.com");
        assert_eq!(mask_email("a@b.c"), "a***@b.c");
        assert_eq!(mask_email("Demo@1234"), "D***@1234");
    }

    #[test]
    fn test_mask_email_without_at_sign() {
        assert_eq!(mask_email(""), "***");
        assert_eq!(mask_email("Demo1234"), "***");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("DEMO@SITE.COM"), "demo@site.com");
        assert_eq!(normalize_email(" demo@site.com\n"), "demo@site.com");
    }
}
