//! API error response body

use serde::{Deserialize, Serialize};

/// JSON body for error responses
///
/// `message` is always present; `error` carries raw upstream detail and is
/// omitted entirely when the error-detail policy is sanitized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,

    /// Optional raw upstream error detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Create an error body with just a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Create an error body with a message and upstream detail
    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(detail.into()),
        }
    }
}
