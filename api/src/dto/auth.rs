use serde::{Deserialize, Serialize};
use validator::Validate;

use ds_core::AuthSession;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired display name, must be unique across all accounts
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    /// Email address used as the login identifier, must be unique
    #[validate(email)]
    pub email: String,

    /// Plaintext password, hashed before it is stored
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful signup or login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub experience: i32,
    pub history: Vec<serde_json::Value>,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            username: session.username,
            experience: session.experience,
            history: session.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_request(username: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_signup_request_passes() {
        let request = signup_request("diner", "diner@example.com", "hunter2!");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_malformed_email_fails_validation() {
        let request = signup_request("diner", "not-an-email", "hunter2!");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_username_fails_validation() {
        let request = signup_request("", "diner@example.com", "hunter2!");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_password_fails_validation() {
        let request = signup_request("diner", "diner@example.com", "");
        assert!(request.validate().is_err());
    }
}
