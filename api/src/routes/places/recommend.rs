use actix_web::{web, HttpResponse};

use crate::dto::places::PlacesRequest;
use crate::handlers::error::domain_error_response;
use crate::routes::auth::AppState;

use ds_core::repositories::UserRepository;
use ds_core::services::recommendation::{PlaceDirectory, RankingEngine};

/// Handler for POST /api/places
///
/// Looks up restaurants near the given coordinates and returns them
/// re-ranked by the ranking service.
///
/// # Request Body
///
/// ```json
/// {
///     "latitude": 40.7,
///     "longitude": -74.0
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// Either the ranked recommendations:
/// ```json
/// {"recommendations": [{"name": "Trattoria", "why": "..."}]}
/// ```
/// or, when the ranking reply could not be parsed, the fallback body
/// (still 200, the ranking step is advisory):
/// ```json
/// {"error": "Fallback: Unable to parse AI response, please try again."}
/// ```
///
/// ## Errors
/// - 400 Bad Request: latitude or longitude missing
/// - 500 Internal Server Error: places directory or ranking service
///   unreachable
pub async fn recommend<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    request: web::Json<PlacesRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceDirectory + 'static,
    R: RankingEngine + 'static,
{
    match state
        .recommendation_service
        .recommend(request.latitude, request.longitude)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(error) => domain_error_response(&error, state.error_policy),
    }
}
