//! User repository trait definition

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Data access contract for the credential store
///
/// Implementations must enforce the unique email and username rules at
/// the storage level: `create` reports a collision as
/// `AuthError::EmailTaken` or `AuthError::UsernameTaken`. That mapping is
/// the authoritative duplicate signal; the service-level existence
/// pre-checks are only a fast path and can race.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Arguments
    /// * `email` - The email address to search for
    ///
    /// # Returns
    /// * `Ok(Some(user))` - User found
    /// * `Ok(None)` - No user with this email
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user and return the stored record
    ///
    /// # Arguments
    /// * `user` - The user entity to persist
    ///
    /// # Returns
    /// * `Ok(user)` - The created record as stored
    /// * `Err(DomainError::Auth(_))` - A unique constraint was violated
    /// * `Err(DomainError)` - Any other storage error
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Check whether any user already holds this email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether any user already holds this username
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;
}
