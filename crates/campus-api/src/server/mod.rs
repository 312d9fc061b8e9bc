//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use campus_common::{AppConfig, AppError, JwtService};
use campus_db::{
    create_pool, run_migrations, PgAccountRepository, PgCampusRepository, PgDailyUpdateRepository, PgFeedbackRepository,
    PgPool, PgReactionRepository, PgReplyRepository, PgSettingsRepository,
};
use campus_service::{ServiceContext, ServiceContextBuilder, TracingRevalidator};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes sit outside the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    Router::new().merge(api).merge(health_routes()).with_state(state)
}

/// Wire the Postgres repositories into a service context
pub fn build_service_context(pool: &PgPool, jwt_service: Arc<JwtService>) -> Result<ServiceContext, AppError> {
    ServiceContextBuilder::new()
        .account_repo(Arc::new(PgAccountRepository::new(pool.clone())))
        .campus_repo(Arc::new(PgCampusRepository::new(pool.clone())))
        .feedback_repo(Arc::new(PgFeedbackRepository::new(pool.clone())))
        .reply_repo(Arc::new(PgReplyRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .update_repo(Arc::new(PgDailyUpdateRepository::new(pool.clone())))
        .settings_repo(Arc::new(PgSettingsRepository::new(pool.clone())))
        .jwt_service(jwt_service)
        .revalidator(Arc::new(TracingRevalidator))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = campus_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry));
    let service_context = build_service_context(&pool, jwt_service)?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
