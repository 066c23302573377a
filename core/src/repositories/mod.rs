//! Repository traits for data access
//!
//! Traits live here in the domain layer; implementations live in the
//! infrastructure crate. Each repository ships with an in-memory mock so
//! services can be tested without a database.

pub mod user;

pub use user::{MockUserRepository, UserRepository};
