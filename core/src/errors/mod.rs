//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, RecommendationError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// Storage-layer failure, wrapped with context
    #[error("Database error: {0}")]
    Database(String),

    /// Unexpected internal fault
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Recommendation(#[from] RecommendationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
