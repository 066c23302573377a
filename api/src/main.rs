use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use std::io;
use std::sync::Arc;

use ds_api::app::create_app;
use ds_api::handlers::error::ErrorPolicy;
use ds_api::routes::auth::AppState;
use ds_core::services::auth::{AuthService, AuthServiceConfig};
use ds_core::services::recommendation::RecommendationService;
use ds_core::services::token::{TokenService, TokenServiceConfig};
use ds_infra::database::connection::DatabasePool;
use ds_infra::database::postgres::PgUserRepository;
use ds_infra::places::GooglePlacesClient;
use ds_infra::ranking::OpenAiRankingClient;
use ds_infra::InfrastructureError;
use ds_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting DineSpot API server");

    // Configuration is read from the environment exactly once, here.
    let config = AppConfig::from_env();
    info!("Environment: {}", config.environment);

    if config.auth.is_using_default_secret() {
        warn!("JWT_SECRET is not set, using the development default; set it before deploying");
    }
    if !config.places.is_configured() {
        warn!("GOOGLE_PLACES_API_KEY is not set; place lookups will fail");
    }
    if !config.ranking.is_configured() {
        warn!("OPENAI_API_KEY is not set; ranking requests will fail");
    }

    // Database pool, connectivity check, and migrations
    let database = DatabasePool::new(&config.database)
        .await
        .map_err(to_io_error)?;
    database.health_check().await.map_err(to_io_error)?;
    database.run_migrations().await.map_err(to_io_error)?;

    // Wire the services behind the app state
    let user_repository = Arc::new(PgUserRepository::new(database.get_pool().clone()));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.session_ttl_secs,
    )));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service,
        AuthServiceConfig::default().with_bcrypt_cost(config.auth.bcrypt_cost),
    ));

    let place_directory = Arc::new(GooglePlacesClient::new(config.places.clone()));
    let ranking_engine = Arc::new(OpenAiRankingClient::new(config.ranking.clone()));
    let recommendation_service =
        Arc::new(RecommendationService::new(place_directory, ranking_engine));

    let state = web::Data::new(AppState {
        auth_service,
        recommendation_service,
        error_policy: ErrorPolicy::new(config.expose_upstream_errors),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

fn to_io_error(error: InfrastructureError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, error.to_string())
}
