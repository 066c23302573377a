//! Configuration module with per-concern sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server binding configuration
//! - `upstream` - Places directory and ranking service credentials

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;
pub mod upstream;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
pub use upstream::{PlacesConfig, RankingConfig};

/// Complete application configuration combining all sub-configurations
///
/// Built once from the process environment at startup and passed to the
/// components that need it; request paths never read the environment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment the process runs in
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Places directory configuration
    pub places: PlacesConfig,

    /// Ranking service configuration
    pub ranking: RankingConfig,

    /// Whether 500 response bodies include raw upstream error detail
    pub expose_upstream_errors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            places: PlacesConfig::default(),
            ranking: RankingConfig::default(),
            expose_upstream_errors: !environment.is_production(),
        }
    }
}

impl AppConfig {
    /// Load the full configuration from environment variables
    ///
    /// Missing variables fall back to development defaults; upstream
    /// credentials are left empty and surface as upstream call failures.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            places: PlacesConfig::from_env(),
            ranking: RankingConfig::from_env(),
            expose_upstream_errors: expose_upstream_errors(environment),
        }
    }
}

/// Resolve the error-detail policy: explicit `EXPOSE_UPSTREAM_ERRORS`
/// wins, otherwise verbose outside production and sanitized in it.
fn expose_upstream_errors(environment: Environment) -> bool {
    match std::env::var("EXPOSE_UPSTREAM_ERRORS") {
        Ok(value) => matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => !environment.is_production(),
    }
}
