//! Authentication service module
//!
//! Owns the signup and login flows: uniqueness checks, password hashing
//! and verification, and session issuance.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
