//! Signup and login flows

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthSession;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service handling signup and login
///
/// Generic over the user repository so the flows can be tested against
/// the in-memory mock.
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
    config: AuthServiceConfig,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new account and open its first session
    ///
    /// Uniqueness is enforced twice: existence pre-checks reject obvious
    /// duplicates before any hashing work, and the storage unique
    /// constraints on insert remain the authoritative signal, since two
    /// concurrent signups can both pass the pre-checks.
    ///
    /// # Arguments
    /// * `username` - Desired unique display name
    /// * `email` - Unique email address, the login identifier
    /// * `password` - Plaintext password, hashed before it is stored
    ///
    /// # Returns
    /// * `Ok(AuthSession)` - Token plus a snapshot of the created record
    /// * `Err(AuthError::EmailTaken)` / `Err(AuthError::UsernameTaken)`
    /// * `Err(DomainError)` - Storage or hashing fault
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthSession> {
        if self.user_repository.exists_by_email(email).await? {
            return Err(AuthError::EmailTaken.into());
        }
        if self.user_repository.exists_by_username(username).await? {
            return Err(AuthError::UsernameTaken.into());
        }

        let password_hash = self.hash_password(password.to_string()).await?;
        let user = User::new(username.to_string(), email.to_string(), password_hash);

        let created = self.user_repository.create(user).await?;
        tracing::info!(user_id = %created.id, "new user registered");

        let token = self.token_service.issue(&created)?;
        Ok(AuthSession::issued(token, &created))
    }

    /// Authenticate an existing account
    ///
    /// Unknown email and wrong password collapse into the same
    /// `InvalidCredentials` error so the response cannot be used to
    /// probe which emails have accounts.
    ///
    /// # Returns
    /// * `Ok(AuthSession)` - Token plus the user's current snapshot
    /// * `Err(AuthError::InvalidCredentials)` - Either failure shape
    /// * `Err(DomainError)` - Storage or verification fault
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        let password_matches = self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?;
        if !password_matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = %user.id, "user logged in");
        let token = self.token_service.issue(&user)?;
        Ok(AuthSession::issued(token, &user))
    }

    /// bcrypt hashing is CPU-bound, so it runs on the blocking pool
    async fn hash_password(&self, password: String) -> DomainResult<String> {
        let cost = self.config.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|join_error| DomainError::Internal {
                message: format!("Hashing task failed: {join_error}"),
            })?
            .map_err(|hash_error| DomainError::Internal {
                message: format!("Password hashing failed: {hash_error}"),
            })
    }

    async fn verify_password(&self, password: String, hash: String) -> DomainResult<bool> {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|join_error| DomainError::Internal {
                message: format!("Verification task failed: {join_error}"),
            })?
            .map_err(|verify_error| DomainError::Internal {
                message: format!("Password verification failed: {verify_error}"),
            })
    }
}
