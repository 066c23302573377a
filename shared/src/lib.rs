//! Shared configuration and common types for the DineSpot server
//!
//! This crate provides functionality used across all server crates:
//! - Environment-sourced configuration types
//! - Common response body structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, PlacesConfig, RankingConfig, ServerConfig,
};
pub use types::ErrorBody;
