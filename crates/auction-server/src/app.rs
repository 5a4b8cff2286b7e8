//! Wiring and the server loop.

use crate::startup::print_startup_info;
use auction_config::AppConfig;
use auction_core::{AuctionError, AuctionResult};
use auction_repository::{create_pool, DaoFactory, DatabasePoolInterface};
use auction_rest::{create_router, AppState};
use auction_service::{
    BidServiceImpl, CategoryServiceImpl, ConditionServiceImpl, DescriptionRule, PasswordHasher,
    ProductServiceImpl, RatingServiceImpl, UserServiceImpl,
};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

/// Builds every service from the factory's DAOs.
#[must_use]
pub fn build_state(
    factory: &DaoFactory,
    config: &AppConfig,
    database: Arc<dyn DatabasePoolInterface>,
) -> AppState {
    AppState {
        user_service: Arc::new(UserServiceImpl::new(
            factory.user_dao(),
            PasswordHasher::new(),
        )),
        category_service: Arc::new(CategoryServiceImpl::new(factory.category_dao())),
        product_service: Arc::new(ProductServiceImpl::new(
            factory.product_dao(),
            DescriptionRule::from_config(&config.rules),
        )),
        bid_service: Arc::new(BidServiceImpl::new(factory.bid_dao())),
        rating_service: Arc::new(RatingServiceImpl::new(factory.rating_dao())),
        condition_service: Arc::new(ConditionServiceImpl::new(factory.condition_dao())),
        database,
    }
}

/// Connects to the database, registers the DAO factory and serves HTTP
/// until a shutdown signal arrives.
///
/// # Errors
///
/// Fails if the database is unreachable, migrations fail, the factory was
/// already initialised or the listener cannot bind.
pub async fn run(config: AppConfig) -> AuctionResult<()> {
    let pool = create_pool(&config.database).await?;
    let database: Arc<dyn DatabasePoolInterface> = pool;

    if config.database.run_migrations {
        database.run_migrations().await?;
    }

    let factory = DaoFactory::initialize(&config.database.provider, Arc::clone(&database))?;
    let state = build_state(factory, &config, Arc::clone(&database));
    let router = create_router(state, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AuctionError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AuctionError::Internal(format!("REST server error: {}", e)))?;

    database.close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_config::DatabaseConfig;
    use auction_repository::DatabasePool;

    #[tokio::test]
    async fn test_build_state_shares_database_handle() {
        let database_config = DatabaseConfig {
            min_connections: 0,
            ..DatabaseConfig::default()
        };
        let database: Arc<dyn DatabasePoolInterface> =
            Arc::new(DatabasePool::lazy(&database_config).unwrap());
        let factory = DaoFactory::new("mysql", Arc::clone(&database));

        let state = build_state(&factory, &AppConfig::default(), database);
        // one handle per DAO plus the readiness probe
        assert_eq!(Arc::strong_count(&state.database), 7);
    }
}
