//! Database connection pool management.

use auction_config::DatabaseConfig;
use auction_core::{AuctionError, AuctionResult};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Database pool operations the DAOs and the server depend on.
#[async_trait]
pub trait DatabasePoolInterface: Send + Sync {
    /// Returns a reference to the underlying MySQL pool.
    fn inner(&self) -> &MySqlPool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> AuctionResult<()>;

    /// Applies pending schema migrations.
    async fn run_migrations(&self) -> AuctionResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::Configuration`] for an unparsable URL and
    /// [`AuctionError::Database`] if no connection can be established.
    pub async fn new(config: &DatabaseConfig) -> AuctionResult<Self> {
        info!("Connecting to MySQL database...");

        let pool = Self::pool_options(config)
            .connect_with(Self::connect_options(config)?)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                AuctionError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("MySQL connection pool established");
        Ok(Self { pool })
    }

    /// Creates a pool that opens connections on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::Configuration`] for an unparsable URL.
    pub fn lazy(config: &DatabaseConfig) -> AuctionResult<Self> {
        let pool = Self::pool_options(config).connect_lazy_with(Self::connect_options(config)?);
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn pool_options(config: &DatabaseConfig) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
    }

    fn connect_options(config: &DatabaseConfig) -> AuctionResult<MySqlConnectOptions> {
        let options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| AuctionError::Configuration(format!("Invalid database URL: {}", e)))?;

        Ok(if config.log_queries {
            options
        } else {
            options.disable_statement_logging()
        })
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    async fn health_check(&self) -> AuctionResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AuctionError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    async fn run_migrations(&self) -> AuctionResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AuctionError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool.
///
/// # Errors
///
/// See [`DatabasePool::new`].
pub async fn create_pool(config: &DatabaseConfig) -> AuctionResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lazy_pool_does_not_connect() {
        let config = DatabaseConfig {
            min_connections: 0,
            ..DatabaseConfig::default()
        };
        let pool = DatabasePool::lazy(&config).unwrap();
        assert_eq!(pool.inner().size(), 0);
    }

    #[tokio::test]
    async fn test_invalid_url_is_configuration_error() {
        let config = DatabaseConfig {
            url: "definitely not a url".to_string(),
            ..DatabaseConfig::default()
        };
        assert!(matches!(
            DatabasePool::lazy(&config),
            Err(AuctionError::Configuration(_))
        ));
    }
}
