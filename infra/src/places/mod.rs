//! Places directory implementations

mod google;

pub use google::GooglePlacesClient;
