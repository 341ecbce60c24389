//! Server setup and initialization
//!
//! Connects the pools, applies migrations, wires the service context and
//! runs the HTTP server until Ctrl-C.

use std::sync::Arc;

use axum::Router;
use booknest_cache::{BookCache, RedisPool};
use booknest_common::{AppConfig, AppError};
use booknest_db::{
    create_pool, run_migrations, DatabaseConfig, PgBookRepository, PgCategoryRepository,
    PgCommentRepository, PgFavoriteRepository, PgReactionRepository,
};
use booknest_service::{ServiceContext, SmtpMailer};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let is_production = config.app.env.is_production();

    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = apply_middleware(api.merge(health_routes()), &config.cors, is_production);

    Ok(router.with_state(state))
}

/// Connect every backing service and build the [`AppState`]
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(format!("migration failed: {e}")))?;
    info!("PostgreSQL ready");

    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    if let Err(e) = redis_pool.health_check().await {
        // Reads fall back to PostgreSQL while Redis is away
        warn!(error = %e, "Redis is unreachable, catalog cache disabled until it recovers");
    }

    let mut builder = ServiceContext::builder()
        .book_repo(Arc::new(PgBookRepository::new(pool.clone())))
        .category_repo(Arc::new(PgCategoryRepository::new(pool.clone())))
        .favorite_repo(Arc::new(PgFavoriteRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .book_cache(BookCache::with_ttl(
            redis_pool.clone(),
            config.cache.catalog_ttl_seconds,
        ));

    match &config.smtp {
        Some(smtp) => {
            let mailer = SmtpMailer::from_config(smtp)
                .map_err(|e| AppError::Config(format!("SMTP: {e}")))?;
            builder = builder.mailer(Arc::new(mailer));
            info!(host = %smtp.host, "Contact form enabled");
        }
        None => warn!("SMTP not configured, contact form disabled"),
    }

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool, redis_pool))
}

/// Serve `app` on `address` until Ctrl-C
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &address).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
