//! Rating data access.

use auction_core::{AuctionResult, ProductId, Rating, RatingId, UserId};
use async_trait::async_trait;

/// Rating data access object. Lists are ordered newest first.
#[async_trait]
pub trait RatingDao: Send + Sync {
    async fn add(&self, rating: &Rating) -> AuctionResult<bool>;

    async fn find_all(&self) -> AuctionResult<Vec<Rating>>;

    async fn find_by_id(&self, id: RatingId) -> AuctionResult<Option<Rating>>;

    async fn find_by_product(&self, product_id: ProductId) -> AuctionResult<Vec<Rating>>;

    /// Lists ratings received by a user.
    async fn find_by_rated_user(&self, rated_user_id: UserId) -> AuctionResult<Vec<Rating>>;

    async fn update(&self, rating: &Rating) -> AuctionResult<bool>;

    async fn delete(&self, id: RatingId) -> AuctionResult<bool>;
}
