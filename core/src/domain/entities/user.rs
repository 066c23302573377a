//! User entity representing a registered account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account
///
/// Identity is the pair of globally unique `username` and `email`. The
/// password is held only as a one-way bcrypt hash and is excluded from
/// serialization so it can never appear in a response or log payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Unique display name chosen at signup
    pub username: String,

    /// Unique email address used as the login identifier
    pub email: String,

    /// One-way bcrypt hash of the password
    #[serde(skip)]
    pub password_hash: String,

    /// Accrued usage counter, starts at zero
    pub experience: i32,

    /// Ordered record of past interactions, oldest first
    pub history: Vec<serde_json::Value>,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with signup defaults: zero experience, empty history
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            experience: 0,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "diner".to_string(),
            "diner@example.com".to_string(),
            "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        )
    }

    #[test]
    fn test_new_user_has_signup_defaults() {
        let user = sample_user();
        assert_eq!(user.experience, 0);
        assert!(user.history.is_empty());
        assert_ne!(user.id, Uuid::nil());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["username"], "diner");
        assert_eq!(value["email"], "diner@example.com");
    }

    #[test]
    fn test_distinct_users_get_distinct_ids() {
        assert_ne!(sample_user().id, sample_user().id);
    }
}
