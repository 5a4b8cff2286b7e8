//! Application state for Axum handlers.

use auction_repository::DatabasePoolInterface;
use auction_service::{
    BidService, CategoryService, ConditionService, ProductService, RatingService, UserService,
};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub category_service: Arc<dyn CategoryService>,
    pub product_service: Arc<dyn ProductService>,
    pub bid_service: Arc<dyn BidService>,
    pub rating_service: Arc<dyn RatingService>,
    pub condition_service: Arc<dyn ConditionService>,
    /// Probed by the readiness endpoint.
    pub database: Arc<dyn DatabasePoolInterface>,
}
