//! Application factory
//!
//! This module provides the factory for creating the Actix-web
//! application with routes, middleware, and body handling wired up.
//! It is generic over the service trait implementations so integration
//! tests can run the real handlers over in-memory doubles.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::handlers::error::validation_error_response;
use crate::middleware::cors::create_cors;
use crate::routes::auth::{login::login, signup::signup, AppState};
use crate::routes::places::recommend::recommend;

use ds_core::repositories::UserRepository;
use ds_core::services::recommendation::{PlaceDirectory, RankingEngine};

/// Create and configure the application with all dependencies
pub fn create_app<U, P, R>(
    app_state: web::Data<AppState<U, P, R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        // The middleware stack wraps the response body, so the concrete
        // body type is left to inference.
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PlaceDirectory + 'static,
    R: RankingEngine + 'static,
{
    // Configure CORS for the current environment
    let cors = create_cors();

    // Malformed or incomplete JSON bodies get the standard 400 body
    let json_config = web::JsonConfig::default().error_handler(|error, _req| {
        log::warn!("Rejected request body: {}", error);
        actix_web::error::InternalError::from_response(error, validation_error_response()).into()
    });

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        // Add middleware (order matters: CORS before logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .route("/signup", web::post().to(signup::<U, P, R>))
                .route("/login", web::post().to(login::<U, P, R>))
                .route("/places", web::post().to(recommend::<U, P, R>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "dinespot-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
