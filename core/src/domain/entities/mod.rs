//! Domain entities
//!
//! Core business objects:
//! - `user` - Registered account with credentials and usage state
//! - `token` - Session token claims and lifetime
//! - `place` - Normalized venue candidates and the shortlist rule
//! - `recommendation` - Ranked output or the parse-failure fallback

pub mod place;
pub mod recommendation;
pub mod token;
pub mod user;

pub use place::{PlaceCandidate, Rating};
pub use recommendation::RecommendationResult;
pub use token::Claims;
pub use user::User;
