//! Session token issuance and validation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and validates signed session tokens
///
/// Tokens are stateless HS256 JWTs carrying the user's id, username and
/// email. Nothing is persisted server-side: validation is signature plus
/// expiry, which is the whole contract for any future authenticated
/// route.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);
        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a session token for a user
    ///
    /// The token expires `session_ttl_secs` from now. Both signup and
    /// login sessions use the same configured lifetime.
    pub fn issue(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::for_user(user, self.config.session_ttl_secs);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|error| {
            tracing::error!(error = %error, "failed to sign session token");
            TokenError::GenerationFailed.into()
        })
    }

    /// Validate a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|error| match error.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired.into(),
                _ => TokenError::Invalid.into(),
            })
    }
}
