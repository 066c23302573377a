//! Google Places Nearby Search client
//!
//! Implements [`PlaceDirectory`] against the legacy Nearby Search API.
//! Auth and quota problems arrive in-band as a non-OK `status` on an
//! HTTP 200 response, so both the transport result and the body status
//! are checked.

use async_trait::async_trait;
use serde::Deserialize;

use ds_core::domain::entities::place::{
    shortlist, PlaceCandidate, Rating, RESTAURANT_CATEGORY, SEARCH_RADIUS_METERS,
};
use ds_core::errors::{DomainError, RecommendationError};
use ds_core::services::recommendation::PlaceDirectory;
use ds_shared::config::PlacesConfig;

/// Nearby Search endpoint
const NEARBY_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Photo retrieval endpoint
const PHOTO_URL: &str = "https://maps.googleapis.com/maps/api/place/photo";

/// Width requested in photo URLs, in pixels
const PHOTO_MAX_WIDTH: u32 = 400;

/// Body statuses that mean the search itself succeeded
const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Google Places implementation of the place directory
pub struct GooglePlacesClient {
    config: PlacesConfig,
    client: reqwest::Client,
}

impl GooglePlacesClient {
    /// Create a new client with the given configuration
    pub fn new(config: PlacesConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client configured from environment variables
    pub fn from_env() -> Self {
        Self::new(PlacesConfig::from_env())
    }
}

/// Wire format of a Nearby Search response
#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

/// One venue as reported by the provider
#[derive(Debug, Deserialize)]
struct PlaceResult {
    #[serde(default)]
    name: String,
    #[serde(default)]
    vicinity: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    photos: Vec<PhotoRef>,
}

#[derive(Debug, Deserialize)]
struct PhotoRef {
    photo_reference: String,
}

impl NearbySearchResponse {
    /// Normalize a provider response into the candidate shortlist
    fn into_candidates(self, api_key: &str) -> Result<Vec<PlaceCandidate>, RecommendationError> {
        match self.status.as_str() {
            STATUS_OK | STATUS_ZERO_RESULTS => {}
            status => {
                let detail = match self.error_message {
                    Some(message) => format!("{}: {}", status, message),
                    None => status.to_string(),
                };
                return Err(RecommendationError::PlacesUpstream { detail });
            }
        }

        let candidates = self
            .results
            .into_iter()
            .map(|result| result.into_candidate(api_key))
            .collect();

        Ok(shortlist(candidates))
    }
}

impl PlaceResult {
    fn into_candidate(self, api_key: &str) -> PlaceCandidate {
        let image = self
            .photos
            .first()
            .map(|photo| photo_url(&photo.photo_reference, api_key));

        PlaceCandidate {
            name: self.name,
            address: self.vicinity,
            rating: Rating::from(self.rating),
            types: self.types,
            image,
        }
    }
}

/// Build the photo-retrieval URL for a photo reference
fn photo_url(reference: &str, api_key: &str) -> String {
    format!(
        "{}?maxwidth={}&photoreference={}&key={}",
        PHOTO_URL, PHOTO_MAX_WIDTH, reference, api_key
    )
}

fn places_unavailable(error: reqwest::Error) -> DomainError {
    tracing::error!(error = %error, "places directory request failed");
    RecommendationError::PlacesUpstream {
        detail: error.to_string(),
    }
    .into()
}

#[async_trait]
impl PlaceDirectory for GooglePlacesClient {
    async fn search_nearby(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<PlaceCandidate>, DomainError> {
        let location = format!("{},{}", latitude, longitude);
        let radius = SEARCH_RADIUS_METERS.to_string();

        tracing::debug!(%location, "querying places directory");

        let response = self
            .client
            .get(NEARBY_SEARCH_URL)
            .query(&[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("type", RESTAURANT_CATEGORY),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(places_unavailable)?
            .error_for_status()
            .map_err(places_unavailable)?;

        let body: NearbySearchResponse =
            response.json().await.map_err(places_unavailable)?;

        let candidates = body.into_candidates(&self.config.api_key)?;
        tracing::debug!(count = candidates.len(), "places shortlist ready");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn venue(name: &str, types: &[&str]) -> serde_json::Value {
        json!({
            "name": name,
            "vicinity": format!("{} road", name),
            "rating": 4.5,
            "types": types,
            "photos": [{"photo_reference": format!("{}-ref", name)}]
        })
    }

    fn parse(value: serde_json::Value) -> NearbySearchResponse {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    #[test]
    fn test_shortlist_applied_to_provider_results() {
        let results: Vec<serde_json::Value> = (1..=8)
            .map(|i| {
                let tags: &[&str] = if i == 3 || i == 7 {
                    &["lodging"]
                } else {
                    &["restaurant", "food"]
                };
                venue(&format!("r{}", i), tags)
            })
            .collect();
        let response = parse(json!({"status": "OK", "results": results}));

        let candidates = response.into_candidates("test-key").expect("should succeed");

        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["r1", "r2", "r4", "r5", "r6"]);
    }

    #[test]
    fn test_missing_fields_map_to_sentinels() {
        let response = parse(json!({
            "status": "OK",
            "results": [{"name": "bare", "types": ["restaurant"]}]
        }));

        let candidates = response.into_candidates("test-key").expect("should succeed");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].rating, Rating::Unrated);
        assert_eq!(candidates[0].address, None);
        assert_eq!(candidates[0].image, None);
    }

    #[test]
    fn test_first_photo_becomes_retrieval_url() {
        let response = parse(json!({
            "status": "OK",
            "results": [{
                "name": "pictured",
                "types": ["restaurant"],
                "photos": [
                    {"photo_reference": "first-ref"},
                    {"photo_reference": "second-ref"}
                ]
            }]
        }));

        let candidates = response.into_candidates("secret-key").expect("should succeed");

        let image = candidates[0].image.as_deref().expect("image expected");
        assert_eq!(
            image,
            "https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photoreference=first-ref&key=secret-key"
        );
    }

    #[test]
    fn test_zero_results_is_an_empty_success() {
        let response = parse(json!({"status": "ZERO_RESULTS"}));

        let candidates = response.into_candidates("test-key").expect("should succeed");

        assert!(candidates.is_empty());
    }

    #[test]
    fn test_denied_status_is_an_upstream_error() {
        let response = parse(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }));

        let error = response.into_candidates("test-key").expect_err("should fail");

        match error {
            RecommendationError::PlacesUpstream { detail } => {
                assert_eq!(detail, "REQUEST_DENIED: The provided API key is invalid.");
            }
            other => panic!("expected places upstream error, got {}", other),
        }
    }

    #[test]
    fn test_denied_status_without_message_keeps_the_status() {
        let response = parse(json!({"status": "OVER_QUERY_LIMIT"}));

        let error = response.into_candidates("test-key").expect_err("should fail");

        match error {
            RecommendationError::PlacesUpstream { detail } => {
                assert_eq!(detail, "OVER_QUERY_LIMIT");
            }
            other => panic!("expected places upstream error, got {}", other),
        }
    }
}
