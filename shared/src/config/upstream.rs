//! Upstream service credential configuration
//!
//! Keys are read once at startup; an empty key is not rejected here and
//! instead surfaces as the corresponding upstream call failing.

use serde::{Deserialize, Serialize};
use std::env;

/// Places directory (Google Places) configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlacesConfig {
    /// API key for the places directory
    pub api_key: String,
}

impl PlacesConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Load the key from `GOOGLE_PLACES_API_KEY`
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GOOGLE_PLACES_API_KEY").unwrap_or_default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Ranking service (OpenAI) configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RankingConfig {
    /// API key for the ranking service
    pub api_key: String,
}

impl RankingConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Load the key from `OPENAI_API_KEY`
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_unconfigured() {
        assert!(!PlacesConfig::default().is_configured());
        assert!(!RankingConfig::default().is_configured());
    }

    #[test]
    fn test_explicit_key_is_configured() {
        assert!(PlacesConfig::new("places-key").is_configured());
        assert!(RankingConfig::new("ranking-key").is_configured());
    }
}
