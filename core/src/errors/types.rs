//! Domain-specific error types for authentication and recommendations
//!
//! The `#[error]` strings double as the client-facing messages, so they
//! must stay stable.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Signup email collides with an existing account
    #[error("Email is already in use")]
    EmailTaken,

    /// Signup username collides with an existing account
    #[error("Username is already taken")]
    UsernameTaken,

    /// Login failure; deliberately covers both unknown email and wrong
    /// password so responses cannot be used for account enumeration
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token generation failed")]
    GenerationFailed,

    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,
}

/// Recommendation pipeline errors
#[derive(Error, Debug)]
pub enum RecommendationError {
    /// Request arrived without both coordinates
    #[error("Location is required")]
    MissingLocation,

    /// Places directory call failed (transport, auth, or quota)
    #[error("Places lookup failed: {detail}")]
    PlacesUpstream { detail: String },

    /// Ranking service call failed at the transport level
    #[error("Ranking request failed: {detail}")]
    RankingUpstream { detail: String },
}
