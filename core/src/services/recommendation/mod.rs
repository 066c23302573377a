//! Recommendation pipeline module
//!
//! The orchestrator composes two external collaborators, abstracted as
//! traits so the infrastructure crate can supply the real clients and
//! tests can substitute doubles.

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::RecommendationService;
pub use traits::{PlaceDirectory, RankingEngine};
