//! HTTP route handlers

pub mod auth;
pub mod places;

pub use auth::AppState;
