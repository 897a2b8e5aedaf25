//! # Demo Account Service
//!
//! Stand-in for a real account backend. Account creation always succeeds;
//! login accepts only the demo credentials. Both calls sleep for the
//! configured latency first.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use shared::{mask_email, normalize_email, AuthResponse, LoginRequest, SignupRequest};

use crate::config::PortalConfig;
use crate::core::error::AppError;
use crate::core::service::AccountService;

/// The only email the demo login accepts (case-insensitive)
pub const DEMO_EMAIL: &str = "demo@site.com";

/// The only password the demo login accepts (exact)
pub const DEMO_PASSWORD: &str = "Demo@1234";

const DEMO_USER_NAME: &str = "Demo User";

#[derive(Debug, Clone)]
pub struct DemoAccountService {
    signup_delay: Duration,
    login_delay: Duration,
}

impl DemoAccountService {
    pub fn new(signup_delay: Duration, login_delay: Duration) -> Self {
        Self {
            signup_delay,
            login_delay,
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.signup_delay, config.login_delay)
    }

    /// Whether the pair matches the demo account
    pub fn is_demo_login(email: &str, password: &str) -> bool {
        normalize_email(email) == DEMO_EMAIL && password == DEMO_PASSWORD
    }
}

impl Default for DemoAccountService {
    fn default() -> Self {
        Self::from_config(&PortalConfig::default())
    }
}

#[async_trait]
impl AccountService for DemoAccountService {
    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email)))]
    async fn create_account(&self, request: SignupRequest) -> Result<AuthResponse, AppError> {
        tracing::info!("Creating account");
        let start = Instant::now();

        tokio::time::sleep(self.signup_delay).await;

        let response = AuthResponse::new(
            uuid::Uuid::new_v4().to_string(),
            request.name,
            request.email,
            "Account created",
        );

        tracing::info!(duration_ms = start.elapsed().as_millis(), "Account created");
        Ok(response)
    }

    #[tracing::instrument(skip(self, request), fields(email = %mask_email(&request.email), remember = request.remember))]
    async fn authenticate(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        tracing::info!("Attempting login");
        let start = Instant::now();

        tokio::time::sleep(self.login_delay).await;

        let duration = start.elapsed();
        if !Self::is_demo_login(&request.email, &request.password) {
            tracing::warn!(duration_ms = duration.as_millis(), "Login failed");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(duration_ms = duration.as_millis(), "Login successful");
        Ok(AuthResponse::new(
            uuid::Uuid::new_v4().to_string(),
            DEMO_USER_NAME,
            DEMO_EMAIL,
            "Logged in",
        ))
    }
}
