use serde::{Deserialize, Serialize};

/// Body of a recommendation request
///
/// Both coordinates are optional at the wire level so that an empty body
/// deserializes cleanly; the orchestrator rejects missing coordinates
/// with the location error rather than a generic parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
