//! Process-wide DAO factory.
//!
//! The factory is initialised once at start-up from `database.provider`
//! and hands out shared DAO handles afterwards.

use crate::{
    BidDao, CategoryDao, ConditionDao, DatabasePoolInterface, MySqlBidDaoImpl,
    MySqlCategoryDaoImpl, MySqlConditionDaoImpl, MySqlProductDaoImpl, MySqlRatingDaoImpl,
    MySqlUserDaoImpl, ProductDao, RatingDao, UserDao,
};
use auction_config::DataProvider;
use auction_core::{AuctionError, AuctionResult};
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

static INSTANCE: OnceLock<DaoFactory> = OnceLock::new();

/// Resolves a configured provider name.
///
/// Unknown or empty names fall back to MySQL, the only implementation.
#[must_use]
pub fn resolve_provider(name: &str) -> DataProvider {
    DataProvider::parse(name).unwrap_or_else(|| {
        warn!(
            "Unknown data provider '{}', falling back to {}",
            name,
            DataProvider::MySql
        );
        DataProvider::MySql
    })
}

/// Holds one DAO per entity for the selected provider.
#[derive(Clone)]
pub struct DaoFactory {
    provider: DataProvider,
    users: Arc<dyn UserDao>,
    categories: Arc<dyn CategoryDao>,
    products: Arc<dyn ProductDao>,
    bids: Arc<dyn BidDao>,
    ratings: Arc<dyn RatingDao>,
    conditions: Arc<dyn ConditionDao>,
}

impl DaoFactory {
    /// Builds a factory without registering it globally.
    #[must_use]
    pub fn new(provider_name: &str, pool: Arc<dyn DatabasePoolInterface>) -> Self {
        match resolve_provider(provider_name) {
            DataProvider::MySql => Self {
                provider: DataProvider::MySql,
                users: Arc::new(MySqlUserDaoImpl::new(Arc::clone(&pool))),
                categories: Arc::new(MySqlCategoryDaoImpl::new(Arc::clone(&pool))),
                products: Arc::new(MySqlProductDaoImpl::new(Arc::clone(&pool))),
                bids: Arc::new(MySqlBidDaoImpl::new(Arc::clone(&pool))),
                ratings: Arc::new(MySqlRatingDaoImpl::new(Arc::clone(&pool))),
                conditions: Arc::new(MySqlConditionDaoImpl::new(pool)),
            },
        }
    }

    /// Builds the factory and registers it as the process-wide instance.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::Configuration`] if a factory was already
    /// initialised.
    pub fn initialize(
        provider_name: &str,
        pool: Arc<dyn DatabasePoolInterface>,
    ) -> AuctionResult<&'static Self> {
        INSTANCE
            .set(Self::new(provider_name, pool))
            .map_err(|_| AuctionError::Configuration("DAO factory already initialized".to_string()))?;

        let factory = Self::instance()?;
        info!("DAO factory initialized with provider: {}", factory.provider);
        Ok(factory)
    }

    /// Returns the process-wide instance.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::Configuration`] before [`DaoFactory::initialize`].
    pub fn instance() -> AuctionResult<&'static Self> {
        INSTANCE
            .get()
            .ok_or_else(|| AuctionError::Configuration("DAO factory not initialized".to_string()))
    }

    /// The provider actually in use.
    #[must_use]
    pub const fn provider(&self) -> DataProvider {
        self.provider
    }

    #[must_use]
    pub fn user_dao(&self) -> Arc<dyn UserDao> {
        Arc::clone(&self.users)
    }

    #[must_use]
    pub fn category_dao(&self) -> Arc<dyn CategoryDao> {
        Arc::clone(&self.categories)
    }

    #[must_use]
    pub fn product_dao(&self) -> Arc<dyn ProductDao> {
        Arc::clone(&self.products)
    }

    #[must_use]
    pub fn bid_dao(&self) -> Arc<dyn BidDao> {
        Arc::clone(&self.bids)
    }

    #[must_use]
    pub fn rating_dao(&self) -> Arc<dyn RatingDao> {
        Arc::clone(&self.ratings)
    }

    #[must_use]
    pub fn condition_dao(&self) -> Arc<dyn ConditionDao> {
        Arc::clone(&self.conditions)
    }
}

impl std::fmt::Debug for DaoFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaoFactory")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}
