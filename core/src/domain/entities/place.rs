//! Place candidates and the shortlist rule

use serde::ser::Serializer;
use serde::Serialize;

/// Fixed search radius for nearby lookups, in meters
pub const SEARCH_RADIUS_METERS: u32 = 20_000;

/// Category tag a venue must carry to survive the shortlist
pub const RESTAURANT_CATEGORY: &str = "restaurant";

/// Maximum number of candidates forwarded to ranking
pub const MAX_CANDIDATES: usize = 5;

/// Sentinel serialized in place of a missing numeric rating
pub const NO_RATING: &str = "No rating";

/// A venue rating: a numeric score or an explicit unrated sentinel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    /// Provider-reported score
    Score(f64),
    /// Provider reported no rating
    Unrated,
}

impl From<Option<f64>> for Rating {
    fn from(score: Option<f64>) -> Self {
        match score {
            Some(value) => Rating::Score(value),
            None => Rating::Unrated,
        }
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Rating::Score(value) => serializer.serialize_f64(*value),
            Rating::Unrated => serializer.serialize_str(NO_RATING),
        }
    }
}

/// A venue normalized to the fields this system needs
///
/// Ephemeral, rebuilt per request. The serialized form is embedded
/// verbatim in the ranking prompt, so the wire details are part of the
/// contract: a missing address is omitted while a missing image is an
/// explicit null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceCandidate {
    /// Venue name
    pub name: String,

    /// Street-level address, when the provider supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Numeric rating or the unrated sentinel
    pub rating: Rating,

    /// Category tags as reported by the places directory
    pub types: Vec<String>,

    /// Photo-retrieval URL, when a photo reference exists
    pub image: Option<String>,
}

impl PlaceCandidate {
    /// Whether the candidate carries the required restaurant tag
    pub fn is_restaurant(&self) -> bool {
        self.types.iter().any(|tag| tag == RESTAURANT_CATEGORY)
    }
}

/// Apply the shortlist rule: keep only restaurant-tagged candidates, in
/// the provider's relevance order, capped at [`MAX_CANDIDATES`].
pub fn shortlist(candidates: Vec<PlaceCandidate>) -> Vec<PlaceCandidate> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.is_restaurant())
        .take(MAX_CANDIDATES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, tags: &[&str]) -> PlaceCandidate {
        PlaceCandidate {
            name: name.to_string(),
            address: Some(format!("{} street", name)),
            rating: Rating::Score(4.2),
            types: tags.iter().map(|tag| tag.to_string()).collect(),
            image: None,
        }
    }

    #[test]
    fn test_shortlist_drops_non_restaurants() {
        let mixed = vec![
            candidate("a", &["restaurant", "food"]),
            candidate("b", &["lodging"]),
            candidate("c", &["restaurant"]),
        ];
        let kept = shortlist(mixed);
        let names: Vec<&str> = kept.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
        assert!(kept.iter().all(|c| c.is_restaurant()));
    }

    #[test]
    fn test_shortlist_caps_at_five_in_provider_order() {
        // Eight venues, six tagged restaurant: the first five of those six
        // survive, untouched in order.
        let mixed = vec![
            candidate("r1", &["restaurant"]),
            candidate("x1", &["museum"]),
            candidate("r2", &["restaurant"]),
            candidate("r3", &["restaurant"]),
            candidate("x2", &["park"]),
            candidate("r4", &["restaurant"]),
            candidate("r5", &["restaurant"]),
            candidate("r6", &["restaurant"]),
        ];
        let kept = shortlist(mixed);
        let names: Vec<&str> = kept.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["r1", "r2", "r3", "r4", "r5"]);
    }

    #[test]
    fn test_unrated_serializes_as_sentinel() {
        let mut unrated = candidate("quiet spot", &["restaurant"]);
        unrated.rating = Rating::Unrated;
        let value = serde_json::to_value(&unrated).unwrap();
        assert_eq!(value["rating"], NO_RATING);
    }

    #[test]
    fn test_numeric_rating_serializes_as_number() {
        let value = serde_json::to_value(candidate("rated", &["restaurant"])).unwrap();
        assert_eq!(value["rating"], 4.2);
    }

    #[test]
    fn test_missing_image_serializes_as_null() {
        let value = serde_json::to_value(candidate("no photo", &["restaurant"])).unwrap();
        assert!(value.get("image").is_some());
        assert!(value["image"].is_null());
    }

    #[test]
    fn test_missing_address_is_omitted() {
        let mut nowhere = candidate("nowhere", &["restaurant"]);
        nowhere.address = None;
        let value = serde_json::to_value(&nowhere).unwrap();
        assert!(value.get("address").is_none());
    }

    #[test]
    fn test_rating_from_optional_score() {
        assert_eq!(Rating::from(Some(3.5)), Rating::Score(3.5));
        assert_eq!(Rating::from(None), Rating::Unrated);
    }
}
