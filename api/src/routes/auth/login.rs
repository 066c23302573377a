use actix_web::{web, HttpResponse};

use crate::dto::auth::{AuthResponse, LoginRequest};
use crate::handlers::error::domain_error_response;

use ds_core::repositories::UserRepository;
use ds_core::services::recommendation::{PlaceDirectory, RankingEngine};

use super::AppState;

/// Handler for POST /api/login
///
/// Verifies credentials and opens a session.
///
/// # Request Body
///
/// ```json
/// {
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
///     "experience": 42,
///     "history": []
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: unknown email or wrong password, same body for both
/// - 500 Internal Server Error: storage failure
pub async fn login<U, P, R>(
    state: web::Data<AppState<U, P, R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceDirectory + 'static,
    R: RankingEngine + 'static,
{
    log::info!("Processing login for email domain: {}", email_domain(&request.email));

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(AuthResponse::from(session)),
        Err(error) => domain_error_response(&error, state.error_policy),
    }
}

/// The part of the email after '@', for logs that must not carry the
/// full login identifier
fn email_domain(email: &str) -> &str {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain,
        None => "invalid",
    }
}
