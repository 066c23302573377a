//! Data transfer objects for the HTTP surface

pub mod auth;
pub mod places;

pub use auth::{AuthResponse, LoginRequest, SignupRequest};
pub use places::PlacesRequest;
