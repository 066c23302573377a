//! Authentication configuration module

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// Token signing and password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key for signing session tokens
    pub jwt_secret: String,

    /// Session token lifetime in seconds
    pub session_ttl_secs: i64,

    /// bcrypt work factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_SECRET),
            session_ttl_secs: 8 * 60 * 60,
            bcrypt_cost: 12,
        }
    }
}

impl AuthConfig {
    /// Create a new auth configuration with a signing secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Set the session lifetime in hours
    pub fn with_session_hours(mut self, hours: i64) -> Self {
        self.session_ttl_secs = hours * 3600;
        self
    }

    /// Load auth parameters from `JWT_SECRET` / `SESSION_TTL_SECS` / `BCRYPT_COST`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|ttl| ttl.parse().ok())
                .unwrap_or(defaults.session_ttl_secs),
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|cost| cost.parse().ok())
                .unwrap_or(defaults.bcrypt_cost),
        }
    }

    /// Check if using the default secret (security warning at startup)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }
}
