//! Recommendation pipeline orchestration

use std::sync::Arc;

use crate::domain::entities::recommendation::RecommendationResult;
use crate::errors::{DomainResult, RecommendationError};

use super::traits::{PlaceDirectory, RankingEngine};

/// Composes the place directory and the ranking engine into a single
/// request/response cycle
///
/// The pipeline is strictly sequential: validate, look up, rank. Each
/// stage either stops the run with its own error or hands its output to
/// the next. No retries, no caching, no timeouts beyond the HTTP
/// client's own defaults.
pub struct RecommendationService<P: PlaceDirectory, R: RankingEngine> {
    place_directory: Arc<P>,
    ranking_engine: Arc<R>,
}

impl<P: PlaceDirectory, R: RankingEngine> RecommendationService<P, R> {
    /// Create a new recommendation service
    pub fn new(place_directory: Arc<P>, ranking_engine: Arc<R>) -> Self {
        Self {
            place_directory,
            ranking_engine,
        }
    }

    /// Run the pipeline for a request's coordinates
    ///
    /// Both coordinates must be present before any network call is made;
    /// any numeric value, including 0.0, is a valid coordinate.
    ///
    /// # Returns
    /// * `Ok(RecommendationResult)` - Ranked output, or the fallback
    ///   payload when the model reply could not be parsed
    /// * `Err(RecommendationError::MissingLocation)` - A coordinate was
    ///   absent
    /// * `Err(RecommendationError::PlacesUpstream)` - Lookup failed; no
    ///   ranking was attempted
    /// * `Err(RecommendationError::RankingUpstream)` - Ranking transport
    ///   failed
    pub async fn recommend(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> DomainResult<RecommendationResult> {
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => (latitude, longitude),
            _ => return Err(RecommendationError::MissingLocation.into()),
        };

        let candidates = self
            .place_directory
            .search_nearby(latitude, longitude)
            .await?;
        tracing::debug!(candidates = candidates.len(), "shortlist collected");

        let result = self.ranking_engine.rank(&candidates).await?;
        if result.is_fallback() {
            tracing::warn!("serving ranking fallback payload");
        }
        Ok(result)
    }
}
