//! Authenticated session snapshot

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::user::User;

/// Result of a successful signup or login: the signed token plus a
/// snapshot of the user it was issued for
///
/// Built from the authoritative record only. For signup that is the row
/// the repository returned after insert, never the request bindings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthSession {
    /// Signed session token
    pub token: String,

    /// Username of the authenticated user
    pub username: String,

    /// Experience counter at issuance
    pub experience: i32,

    /// Interaction history at issuance
    pub history: Vec<Value>,
}

impl AuthSession {
    /// Snapshot a user together with their freshly issued token
    pub fn issued(token: String, user: &User) -> Self {
        Self {
            token,
            username: user.username.clone(),
            experience: user.experience,
            history: user.history.clone(),
        }
    }
}
