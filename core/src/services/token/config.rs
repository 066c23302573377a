//! Token service configuration

use crate::domain::entities::token::DEFAULT_SESSION_TTL_SECS;

/// Configuration for session token issuance and validation
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret used for HMAC signing
    pub jwt_secret: String,

    /// Session lifetime in seconds, shared by signup and login
    pub session_ttl_secs: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("your-secret-key-change-in-production"),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl TokenServiceConfig {
    /// Create a configuration with an explicit secret and lifetime
    pub fn new(jwt_secret: impl Into<String>, session_ttl_secs: i64) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            session_ttl_secs,
        }
    }
}
