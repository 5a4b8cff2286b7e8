//! Rating service implementation.

use crate::rating_service::RatingService;
use auction_core::{AuctionResult, ProductId, Rating, RatingId, UserId, ValidateExt};
use auction_repository::RatingDao;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Rating service over a [`RatingDao`].
pub struct RatingServiceImpl {
    rating_dao: Arc<dyn RatingDao>,
}

impl RatingServiceImpl {
    /// Creates a new rating service.
    #[must_use]
    pub fn new(rating_dao: Arc<dyn RatingDao>) -> Self {
        Self { rating_dao }
    }
}

#[async_trait]
impl RatingService for RatingServiceImpl {
    async fn add(&self, rating: &Rating) -> AuctionResult<bool> {
        debug!(
            "Adding rating of {} by {}",
            rating.rated_user.id, rating.rating_user.id
        );

        rating.validate_request()?;
        let added = self.rating_dao.add(rating).await?;
        if added {
            info!("Rating added: {}", rating.id);
        }
        Ok(added)
    }

    async fn get_all(&self) -> AuctionResult<Vec<Rating>> {
        self.rating_dao.find_all().await
    }

    async fn get_by_id(&self, id: RatingId) -> AuctionResult<Option<Rating>> {
        debug!("Getting rating: {}", id);
        self.rating_dao.find_by_id(id).await
    }

    async fn get_by_product(&self, product_id: ProductId) -> AuctionResult<Vec<Rating>> {
        debug!("Listing ratings for product: {}", product_id);
        self.rating_dao.find_by_product(product_id).await
    }

    async fn get_by_rated_user(&self, rated_user_id: UserId) -> AuctionResult<Vec<Rating>> {
        debug!("Listing ratings received by: {}", rated_user_id);
        self.rating_dao.find_by_rated_user(rated_user_id).await
    }

    async fn average_grade(&self, rated_user_id: UserId) -> AuctionResult<Option<f64>> {
        let ratings = self.rating_dao.find_by_rated_user(rated_user_id).await?;
        if ratings.is_empty() {
            return Ok(None);
        }

        let total: i64 = ratings.iter().map(|r| i64::from(r.grade)).sum();
        Ok(Some(total as f64 / ratings.len() as f64))
    }

    async fn update(&self, rating: &Rating) -> AuctionResult<bool> {
        debug!("Updating rating: {}", rating.id);

        rating.validate_request()?;
        let updated = self.rating_dao.update(rating).await?;
        if updated {
            info!("Rating updated: {}", rating.id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: RatingId) -> AuctionResult<bool> {
        debug!("Deleting rating: {}", id);

        let deleted = self.rating_dao.delete(id).await?;
        if deleted {
            info!("Rating deleted: {}", id);
        }
        Ok(deleted)
    }
}
