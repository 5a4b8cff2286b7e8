//! Rating service trait definition.

use auction_core::{AuctionResult, ProductId, Rating, RatingId, UserId};
use async_trait::async_trait;

/// Rating service trait.
#[async_trait]
pub trait RatingService: Send + Sync {
    async fn add(&self, rating: &Rating) -> AuctionResult<bool>;

    async fn get_all(&self) -> AuctionResult<Vec<Rating>>;

    async fn get_by_id(&self, id: RatingId) -> AuctionResult<Option<Rating>>;

    async fn get_by_product(&self, product_id: ProductId) -> AuctionResult<Vec<Rating>>;

    /// Lists ratings a user received, newest first.
    async fn get_by_rated_user(&self, rated_user_id: UserId) -> AuctionResult<Vec<Rating>>;

    /// Mean grade a user received, `None` if they have no ratings.
    async fn average_grade(&self, rated_user_id: UserId) -> AuctionResult<Option<f64>>;

    async fn update(&self, rating: &Rating) -> AuctionResult<bool>;

    async fn delete(&self, id: RatingId) -> AuctionResult<bool>;
}
