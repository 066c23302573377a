//! Session token claims and lifetime

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Default session lifetime in seconds (8 hours)
pub const DEFAULT_SESSION_TTL_SECS: i64 = 8 * 60 * 60;

/// Claims carried by a signed session token
///
/// Sessions are stateless: nothing is persisted server-side, so validation
/// is purely signature plus expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user id as a string
    pub sub: String,

    /// Username snapshot taken at issuance
    pub username: String,

    /// Email snapshot taken at issuance
    pub email: String,

    /// Issued-at time (Unix seconds)
    pub iat: i64,

    /// Expiry time (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a user session expiring `ttl_secs` from now
    pub fn for_user(user: &User, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            iat: now,
            exp: now + ttl_secs,
        }
    }

    /// Check whether the expiry time has passed
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }

    /// Parse the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}
