//! # Portal Configuration
//!
//! Timing and presenter selection, loaded from environment variables and
//! validated on startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `PORTAL_SIGNUP_DELAY_MS` | 300 |
//! | `PORTAL_LOGIN_DELAY_MS` | 900 |
//! | `PORTAL_REDIRECT_DELAY_MS` | 900 |
//! | `PORTAL_SIGNUP_TOAST_MS` | 2000 |
//! | `PORTAL_LOGIN_TOAST_MS` | 2200 |
//! | `PORTAL_NOTIFIER` | `toast` (or `timer`) |

use std::str::FromStr;
use std::time::Duration;

use crate::core::error::AppError;

/// Longest delay or lifetime accepted by [`PortalConfig::validate`]
pub const MAX_DELAY: Duration = Duration::from_secs(60);

/// Which notification presenter the binary wires in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierKind {
    /// `egui-notify` toasts
    Toast,
    /// Plain banner drawn from state, hidden by a timer
    Timer,
}

impl FromStr for NotifierKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toast" => Ok(NotifierKind::Toast),
            "timer" => Ok(NotifierKind::Timer),
            other => Err(AppError::Config(format!(
                "PORTAL_NOTIFIER must be 'toast' or 'timer', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Simulated account creation latency
    pub signup_delay: Duration,
    /// Simulated credential check latency
    pub login_delay: Duration,
    /// Pause between sign-up success and the redirect to login
    pub redirect_delay: Duration,
    pub signup_notification_lifetime: Duration,
    pub login_notification_lifetime: Duration,
    pub notifier: NotifierKind,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            signup_delay: Duration::from_millis(300),
            login_delay: Duration::from_millis(900),
            redirect_delay: Duration::from_millis(900),
            signup_notification_lifetime: Duration::from_millis(2000),
            login_notification_lifetime: Duration::from_millis(2200),
            notifier: NotifierKind::Toast,
        }
    }
}

impl PortalConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to
    /// defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            signup_delay: millis(&lookup, "PORTAL_SIGNUP_DELAY_MS", defaults.signup_delay)?,
            login_delay: millis(&lookup, "PORTAL_LOGIN_DELAY_MS", defaults.login_delay)?,
            redirect_delay: millis(&lookup, "PORTAL_REDIRECT_DELAY_MS", defaults.redirect_delay)?,
            signup_notification_lifetime: millis(
                &lookup,
                "PORTAL_SIGNUP_TOAST_MS",
                defaults.signup_notification_lifetime,
            )?,
            login_notification_lifetime: millis(
                &lookup,
                "PORTAL_LOGIN_TOAST_MS",
                defaults.login_notification_lifetime,
            )?,
            notifier: match lookup("PORTAL_NOTIFIER") {
                Some(value) => value.parse()?,
                None => defaults.notifier,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.signup_notification_lifetime.is_zero() || self.login_notification_lifetime.is_zero() {
            return Err(AppError::Config(
                "notification lifetimes must be greater than zero".to_string(),
            ));
        }

        let timings = [
            ("PORTAL_SIGNUP_DELAY_MS", self.signup_delay),
            ("PORTAL_LOGIN_DELAY_MS", self.login_delay),
            ("PORTAL_REDIRECT_DELAY_MS", self.redirect_delay),
            ("PORTAL_SIGNUP_TOAST_MS", self.signup_notification_lifetime),
            ("PORTAL_LOGIN_TOAST_MS", self.login_notification_lifetime),
        ];
        for (key, value) in timings {
            if value > MAX_DELAY {
                return Err(AppError::Config(format!(
                    "{} must be at most {} ms",
                    key,
                    MAX_DELAY.as_millis()
                )));
            }
        }

        Ok(())
    }
}

fn millis<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| AppError::Config(format!("{} must be a whole number of milliseconds: {}", key, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = PortalConfig::from_lookup(|_| None).expect("defaults are valid");

        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.signup_delay, Duration::from_millis(300));
        assert_eq!(config.login_delay, Duration::from_millis(900));
        assert_eq!(config.redirect_delay, Duration::from_millis(900));
        assert_eq!(config.signup_notification_lifetime, Duration::from_millis(2000));
        assert_eq!(config.login_notification_lifetime, Duration::from_millis(2200));
        assert_eq!(config.notifier, NotifierKind::Toast);
    }

    #[test]
    fn test_overrides() {
        let config = PortalConfig::from_lookup(lookup_from(&[
            ("PORTAL_LOGIN_DELAY_MS", "50"),
            ("PORTAL_SIGNUP_TOAST_MS", " 1500 "),
            ("PORTAL_NOTIFIER", "Timer"),
        ]))
        .expect("valid overrides");

        assert_eq!(config.login_delay, Duration::from_millis(50));
        assert_eq!(config.signup_notification_lifetime, Duration::from_millis(1500));
        assert_eq!(config.notifier, NotifierKind::Timer);
        assert_eq!(config.signup_delay, Duration::from_millis(300));
    }

    #[test]
    fn test_zero_delay_is_allowed() {
        let config = PortalConfig::from_lookup(lookup_from(&[("PORTAL_SIGNUP_DELAY_MS", "0")]))
            .expect("zero latency is fine");
        assert!(config.signup_delay.is_zero());
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_LOGIN_DELAY_MS", "fast")]))
            .expect_err("not a number");
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("PORTAL_LOGIN_DELAY_MS")));
    }

    #[test]
    fn test_rejects_zero_lifetime() {
        let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_LOGIN_TOAST_MS", "0")]))
            .expect_err("zero lifetime");
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_rejects_long_delay() {
        let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_REDIRECT_DELAY_MS", "60001")]))
            .expect_err("over a minute");
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("PORTAL_REDIRECT_DELAY_MS")));
    }

    #[test]
    fn test_unknown_notifier() {
        assert_eq!("toast".parse::<NotifierKind>(), Ok(NotifierKind::Toast));
        assert!("popup".parse::<NotifierKind>().is_err());
    }
}
