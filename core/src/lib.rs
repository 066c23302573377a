//! Core domain layer for the DineSpot backend
//!
//! This crate contains the business logic, free of HTTP, SQL, and provider
//! wire formats:
//! - Domain entities (users, session claims, place candidates, results)
//! - The error taxonomy shared by every layer above
//! - Repository traits with an in-memory mock for tests
//! - Domain services: authentication, token issuance, and the
//!   recommendation orchestrator with its external-service traits

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used items at crate root
pub use domain::entities::place::{PlaceCandidate, Rating};
pub use domain::entities::recommendation::RecommendationResult;
pub use domain::entities::user::User;
pub use domain::value_objects::AuthSession;
pub use errors::{AuthError, DomainError, DomainResult, RecommendationError, TokenError};
pub use repositories::{MockUserRepository, UserRepository};
pub use services::auth::AuthService;
pub use services::recommendation::{PlaceDirectory, RankingEngine, RecommendationService};
pub use services::token::TokenService;
