//! Authentication route handlers
//!
//! This module contains the account endpoints:
//! - Signup (create an account, open its first session)
//! - Login (verify credentials, open a session)

pub mod login;
pub mod signup;

pub use signup::AppState;
