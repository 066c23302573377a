//! # Infrastructure Layer
//!
//! Concrete implementations of the contracts declared in `ds_core`:
//!
//! - **database**: PostgreSQL connection pool and the SQLx-backed
//!   user repository
//! - **places**: Google Places Nearby Search client
//! - **ranking**: OpenAI chat-completions client
//!
//! Nothing in this crate is referenced by the domain layer directly;
//! the API crate wires these implementations into the services at
//! startup.

pub mod database;
pub mod places;
pub mod ranking;

use thiserror::Error;

/// Errors raised while setting up or operating infrastructure services.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

pub use database::connection::DatabasePool;
pub use database::postgres::PgUserRepository;
pub use places::GooglePlacesClient;
pub use ranking::OpenAiRankingClient;
