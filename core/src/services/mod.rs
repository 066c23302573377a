//! Domain services
//!
//! - `auth` - Signup and login flows
//! - `token` - Session token issuance and validation
//! - `recommendation` - Places lookup plus ranking orchestration

pub mod auth;
pub mod recommendation;
pub mod token;

pub use auth::AuthService;
pub use recommendation::RecommendationService;
pub use token::TokenService;
