//! Unit tests for the recommendation orchestrator

use std::sync::Arc;

use serde_json::json;

use super::mocks::{FixtureDirectory, ScriptedRanking};
use crate::domain::entities::place::{PlaceCandidate, Rating};
use crate::domain::entities::recommendation::RecommendationResult;
use crate::errors::{DomainError, RecommendationError};
use crate::services::recommendation::RecommendationService;

fn venue(name: &str, tags: &[&str]) -> PlaceCandidate {
    PlaceCandidate {
        name: name.to_string(),
        address: Some(format!("{} avenue", name)),
        rating: Rating::Score(4.0),
        types: tags.iter().map(|tag| tag.to_string()).collect(),
        image: None,
    }
}

fn ranked_reply() -> RecommendationResult {
    RecommendationResult::Ranked(json!({"recommendations": [{"name": "r1"}]}))
}

fn pipeline(
    directory: FixtureDirectory,
    ranking: ScriptedRanking,
) -> (
    RecommendationService<FixtureDirectory, ScriptedRanking>,
    Arc<FixtureDirectory>,
    Arc<ScriptedRanking>,
) {
    let directory = Arc::new(directory);
    let ranking = Arc::new(ranking);
    let service = RecommendationService::new(directory.clone(), ranking.clone());
    (service, directory, ranking)
}

#[tokio::test]
async fn test_missing_latitude_short_circuits_before_any_call() {
    let (service, directory, ranking) = pipeline(
        FixtureDirectory::returning(vec![venue("r1", &["restaurant"])]),
        ScriptedRanking::returning(ranked_reply()),
    );

    let result = service.recommend(None, Some(-74.0)).await;
    assert!(matches!(
        result,
        Err(DomainError::Recommendation(
            RecommendationError::MissingLocation
        ))
    ));
    assert_eq!(directory.calls(), 0);
    assert_eq!(ranking.calls(), 0);
}

#[tokio::test]
async fn test_missing_longitude_short_circuits_before_any_call() {
    let (service, directory, ranking) = pipeline(
        FixtureDirectory::returning(vec![venue("r1", &["restaurant"])]),
        ScriptedRanking::returning(ranked_reply()),
    );

    let result = service.recommend(Some(40.7), None).await;
    assert!(matches!(
        result,
        Err(DomainError::Recommendation(
            RecommendationError::MissingLocation
        ))
    ));
    assert_eq!(directory.calls(), 0);
    assert_eq!(ranking.calls(), 0);
}

#[tokio::test]
async fn test_zero_is_a_valid_coordinate() {
    let (service, directory, _ranking) = pipeline(
        FixtureDirectory::returning(vec![venue("r1", &["restaurant"])]),
        ScriptedRanking::returning(ranked_reply()),
    );

    let result = service.recommend(Some(0.0), Some(0.0)).await;
    assert!(result.is_ok());
    assert_eq!(directory.calls(), 1);
}

#[tokio::test]
async fn test_ranked_result_passes_through() {
    let (service, _, _) = pipeline(
        FixtureDirectory::returning(vec![venue("r1", &["restaurant"])]),
        ScriptedRanking::returning(ranked_reply()),
    );

    let result = service.recommend(Some(40.7), Some(-74.0)).await.unwrap();
    assert_eq!(result, ranked_reply());
}

#[tokio::test]
async fn test_lookup_failure_stops_before_ranking() {
    let (service, directory, ranking) = pipeline(
        FixtureDirectory::failing("quota exceeded"),
        ScriptedRanking::returning(ranked_reply()),
    );

    let result = service.recommend(Some(40.7), Some(-74.0)).await;
    match result {
        Err(DomainError::Recommendation(RecommendationError::PlacesUpstream { detail })) => {
            assert_eq!(detail, "quota exceeded");
        }
        other => panic!("expected places upstream error, got {:?}", other),
    }
    assert_eq!(directory.calls(), 1);
    assert_eq!(ranking.calls(), 0);
}

#[tokio::test]
async fn test_ranking_transport_failure_propagates() {
    let (service, _, ranking) = pipeline(
        FixtureDirectory::returning(vec![venue("r1", &["restaurant"])]),
        ScriptedRanking::failing("connection reset"),
    );

    let result = service.recommend(Some(40.7), Some(-74.0)).await;
    assert!(matches!(
        result,
        Err(DomainError::Recommendation(
            RecommendationError::RankingUpstream { .. }
        ))
    ));
    assert_eq!(ranking.calls(), 1);
}

#[tokio::test]
async fn test_parse_fallback_is_a_successful_result() {
    let (service, _, _) = pipeline(
        FixtureDirectory::returning(vec![venue("r1", &["restaurant"])]),
        ScriptedRanking::returning(RecommendationResult::fallback()),
    );

    let result = service.recommend(Some(40.7), Some(-74.0)).await.unwrap();
    assert!(result.is_fallback());
}

#[tokio::test]
async fn test_ranking_receives_first_five_restaurants_in_provider_order() {
    // Eight venues from the provider, six tagged restaurant: exactly the
    // first five of those six reach the ranking engine.
    let provider_page = vec![
        venue("r1", &["restaurant", "food"]),
        venue("x1", &["museum"]),
        venue("r2", &["restaurant"]),
        venue("r3", &["restaurant"]),
        venue("x2", &["park"]),
        venue("r4", &["restaurant"]),
        venue("r5", &["restaurant"]),
        venue("r6", &["restaurant"]),
    ];
    let (service, _, ranking) = pipeline(
        FixtureDirectory::returning(provider_page),
        ScriptedRanking::returning(ranked_reply()),
    );

    service.recommend(Some(40.7), Some(-74.0)).await.unwrap();
    assert_eq!(ranking.seen_names(), ["r1", "r2", "r3", "r4", "r5"]);
}
