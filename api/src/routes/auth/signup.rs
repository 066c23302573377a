use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use crate::dto::auth::{AuthResponse, SignupRequest};
use crate::handlers::error::{domain_error_response, validation_error_response, ErrorPolicy};

use ds_core::repositories::UserRepository;
use ds_core::services::auth::AuthService;
use ds_core::services::recommendation::{PlaceDirectory, RankingEngine, RecommendationService};

/// Application state that holds shared services
pub struct AppState<U, P, R>
where
    U: UserRepository,
    P: PlaceDirectory,
    R: RankingEngine,
{
    pub auth_service: Arc<AuthService<U>>,
    pub recommendation_service: Arc<RecommendationService<P, R>>,
    pub error_policy: ErrorPolicy,
}

/// Handler for POST /api/signup
///
/// Creates an account and opens its first session.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "diner",
///     "email": "diner@example.com",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "<jwt>",
///     "username": "diner",
///     "experience": 0,
///     "history": []
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: email or username already taken, or invalid body
/// - 500 Internal Server Error: storage failure
pub async fn signup<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceDirectory + 'static,
    R: RankingEngine + 'static,
{
    if let Err(validation_errors) = request.validate() {
        log::warn!("Signup request failed validation: {}", validation_errors);
        return validation_error_response();
    }

    log::info!("Processing signup for username: {}", request.username);

    match state
        .auth_service
        .signup(&request.username, &request.email, &request.password)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(AuthResponse::from(session)),
        Err(error) => domain_error_response(&error, state.error_policy),
    }
}
