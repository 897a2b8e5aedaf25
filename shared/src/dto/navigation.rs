use serde::{Deserialize, Serialize};

/// State carried by a screen redirect.
///
/// Sign-up hands this to the login screen so it can greet the new account
/// and prefill the address that was just registered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub just_signed_up: bool,
    pub email: String,
}

impl NavigationState {
    /// State for the redirect that follows a successful sign-up.
    pub fn after_signup(email: impl Into<String>) -> Self {
        Self {
            just_signed_up: true,
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_state_uses_camel_case_keys() {
        let state = NavigationState::after_signup("jane@x.com");
        let json = serde_json::to_value(&state).expect("navigation state should serialize");

        assert_eq!(json["justSignedUp"], serde_json::Value::Bool(true));
        assert_eq!(json["email"], "jane@x.com");
    }
}
