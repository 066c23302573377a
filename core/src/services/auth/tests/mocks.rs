//! Test doubles for the authentication service tests

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::{MockUserRepository, UserRepository};

/// Repository that reports no duplicates from the existence pre-checks
/// but still enforces uniqueness on insert, imitating a concurrent
/// signup that slipped past the checks.
pub struct RacingUserRepository {
    pub inner: MockUserRepository,
}

impl RacingUserRepository {
    pub fn new() -> Self {
        Self {
            inner: MockUserRepository::new(),
        }
    }
}

#[async_trait]
impl UserRepository for RacingUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.inner.find_by_email(email).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.inner.create(user).await
    }

    async fn exists_by_email(&self, _email: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn exists_by_username(&self, _username: &str) -> Result<bool, DomainError> {
        Ok(false)
    }
}
