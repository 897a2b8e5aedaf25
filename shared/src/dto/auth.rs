use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// "Remember me" checkbox state; accepted but not acted on yet
    #[serde(default)]
    pub remember: bool,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User information (public, safe to show in the UI)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

/// Authentication response (signup/login success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub message: String,
}

impl AuthResponse {
    /// Build a response stamped with the current UTC time as `created_at`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user: UserInfo {
                id: id.into(),
                name: name.into(),
                email: email.into(),
                created_at: chrono::Utc::now().to_rfc3339(),
            },
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_remember_defaults_to_false() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"demo@site.com","password":"Demo@1234"}"#)
                .expect("login request should deserialize");

        assert_eq!(request.email, "demo@site.com");
        assert!(!request.remember);
    }

    #[test]
    fn test_auth_response_new_sets_timestamp() {
        let response = AuthResponse::new("1", "Jane Doe", "jane@x.com", "User created successfully!");

        assert_eq!(response.user.name, "Jane Doe");
        assert_eq!(response.message, "User created successfully!");
        assert!(chrono::DateTime::parse_from_rfc3339(&response.user.created_at).is_ok());
    }
}
