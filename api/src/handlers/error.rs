//! Domain error to HTTP response mapping
//!
//! The response bodies carry fixed client-facing strings; the real error
//! is logged server-side before any sanitization happens.

use actix_web::HttpResponse;

use ds_core::errors::{AuthError, DomainError, RecommendationError};
use ds_shared::types::response::ErrorBody;

/// Client-facing message for places directory failures
const PLACES_FAILURE_MESSAGE: &str = "Error retrieving places from Google";

/// Client-facing message for ranking service failures
const RANKING_FAILURE_MESSAGE: &str = "Error processing OpenAI request";

/// Client-facing message for storage and unexpected faults
const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Client-facing message for request bodies that fail validation
const INVALID_REQUEST_MESSAGE: &str = "Invalid request data";

/// How much upstream error detail leaves the process
///
/// Verbose responses append the raw upstream error string to 500 bodies;
/// sanitized responses omit the field entirely.
#[derive(Debug, Clone, Copy)]
pub struct ErrorPolicy {
    pub expose_upstream_errors: bool,
}

impl ErrorPolicy {
    pub fn new(expose_upstream_errors: bool) -> Self {
        Self {
            expose_upstream_errors,
        }
    }

    fn upstream_body(&self, message: &str, detail: &str) -> ErrorBody {
        if self.expose_upstream_errors {
            ErrorBody::with_detail(message, detail)
        } else {
            ErrorBody::message(message)
        }
    }
}

/// Convert a domain error into the matching HTTP response
pub fn domain_error_response(error: &DomainError, policy: ErrorPolicy) -> HttpResponse {
    log::error!("Domain error: {}", error);

    match error {
        DomainError::Auth(AuthError::EmailTaken) | DomainError::Auth(AuthError::UsernameTaken) => {
            HttpResponse::BadRequest().json(ErrorBody::message(error.to_string()))
        }
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::Unauthorized().json(ErrorBody::message(error.to_string()))
        }
        DomainError::Recommendation(RecommendationError::MissingLocation) => {
            HttpResponse::BadRequest().json(ErrorBody::message(error.to_string()))
        }
        DomainError::Recommendation(RecommendationError::PlacesUpstream { detail }) => {
            HttpResponse::InternalServerError()
                .json(policy.upstream_body(PLACES_FAILURE_MESSAGE, detail))
        }
        DomainError::Recommendation(RecommendationError::RankingUpstream { detail }) => {
            HttpResponse::InternalServerError()
                .json(policy.upstream_body(RANKING_FAILURE_MESSAGE, detail))
        }
        DomainError::Token(_) | DomainError::Database(_) | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(ErrorBody::message(SERVER_ERROR_MESSAGE))
        }
    }
}

/// Response for request bodies that fail DTO validation
pub fn validation_error_response() -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody::message(INVALID_REQUEST_MESSAGE))
}
