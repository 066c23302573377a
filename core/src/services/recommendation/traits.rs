//! External service traits for the recommendation pipeline

use async_trait::async_trait;

use crate::domain::entities::place::PlaceCandidate;
use crate::domain::entities::recommendation::RecommendationResult;
use crate::errors::DomainError;

/// Venue lookup backed by an external places directory
#[async_trait]
pub trait PlaceDirectory: Send + Sync {
    /// Search for venues near the given coordinates
    ///
    /// Implementations return the shortlist: at most
    /// [`crate::domain::entities::place::MAX_CANDIDATES`] candidates,
    /// every one carrying the restaurant tag, in the provider's
    /// relevance order.
    ///
    /// # Errors
    /// * `RecommendationError::PlacesUpstream` - transport, auth, or
    ///   quota failure of the upstream call
    async fn search_nearby(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<PlaceCandidate>, DomainError>;
}

/// Generative re-ranking of a candidate shortlist
#[async_trait]
pub trait RankingEngine: Send + Sync {
    /// Submit candidates for ranking
    ///
    /// A malformed model reply is not an error here: it surfaces as the
    /// fallback result. Only transport-level failures are `Err`.
    ///
    /// # Errors
    /// * `RecommendationError::RankingUpstream` - the upstream call
    ///   itself failed
    async fn rank(
        &self,
        candidates: &[PlaceCandidate],
    ) -> Result<RecommendationResult, DomainError>;
}
