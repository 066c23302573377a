//! Recommendation results and the parse-failure fallback

use serde::Serialize;
use serde_json::Value;

/// Message served when the ranking output cannot be parsed as JSON
pub const RANKING_FALLBACK_MESSAGE: &str =
    "Fallback: Unable to parse AI response, please try again.";

/// Outcome of a ranking pass
///
/// `Ranked` carries the model's JSON verbatim (expected shape: an object
/// with a "recommendations" key). `Fallback` is the degrade-gracefully
/// payload: ranking is advisory, so malformed model output turns into a
/// successful response with an error-shaped body instead of a failure.
/// Callers therefore have to check for an "error" key even on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecommendationResult {
    /// Parsed ranking output, returned verbatim
    Ranked(Value),

    /// Parse-failure payload
    Fallback { error: String },
}

impl RecommendationResult {
    /// The canonical fallback payload
    pub fn fallback() -> Self {
        Self::Fallback {
            error: RANKING_FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Interpret a raw model reply
    ///
    /// Valid JSON passes through verbatim; anything else (prose, fenced
    /// code blocks, truncated output) becomes the fallback payload.
    pub fn from_model_reply(reply: &str) -> Self {
        match serde_json::from_str::<Value>(reply) {
            Ok(parsed) => Self::Ranked(parsed),
            Err(parse_error) => {
                tracing::warn!(
                    error = %parse_error,
                    "ranking reply was not valid JSON, serving fallback"
                );
                Self::fallback()
            }
        }
    }

    /// Whether this is the parse-failure fallback
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}
