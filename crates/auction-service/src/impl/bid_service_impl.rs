//! Bid service implementation.

use crate::bid_service::BidService;
use auction_core::{AuctionResult, Bid, BidId, ProductId, UserId, ValidateExt};
use auction_repository::BidDao;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Bid service over a [`BidDao`].
pub struct BidServiceImpl {
    bid_dao: Arc<dyn BidDao>,
}

impl BidServiceImpl {
    /// Creates a new bid service.
    #[must_use]
    pub fn new(bid_dao: Arc<dyn BidDao>) -> Self {
        Self { bid_dao }
    }
}

#[async_trait]
impl BidService for BidServiceImpl {
    async fn add(&self, bid: &Bid) -> AuctionResult<bool> {
        debug!("Adding bid of {} {} on {}", bid.amount, bid.currency, bid.product.id);

        bid.validate_request()?;
        let added = self.bid_dao.add(bid).await?;
        if added {
            info!("Bid added: {}", bid.id);
        }
        Ok(added)
    }

    async fn get_all(&self) -> AuctionResult<Vec<Bid>> {
        self.bid_dao.find_all().await
    }

    async fn get_by_id(&self, id: BidId) -> AuctionResult<Option<Bid>> {
        debug!("Getting bid: {}", id);
        self.bid_dao.find_by_id(id).await
    }

    async fn get_by_product(&self, product_id: ProductId) -> AuctionResult<Vec<Bid>> {
        debug!("Listing bids on product: {}", product_id);
        self.bid_dao.find_by_product(product_id).await
    }

    async fn get_by_buyer(&self, buyer_id: UserId) -> AuctionResult<Vec<Bid>> {
        debug!("Listing bids by buyer: {}", buyer_id);
        self.bid_dao.find_by_buyer(buyer_id).await
    }

    async fn highest_for_product(&self, product_id: ProductId) -> AuctionResult<Option<Bid>> {
        debug!("Getting highest bid on product: {}", product_id);
        self.bid_dao.find_highest_for_product(product_id).await
    }

    async fn update(&self, bid: &Bid) -> AuctionResult<bool> {
        debug!("Updating bid: {}", bid.id);

        bid.validate_request()?;
        let updated = self.bid_dao.update(bid).await?;
        if updated {
            info!("Bid updated: {}", bid.id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: BidId) -> AuctionResult<bool> {
        debug!("Deleting bid: {}", id);

        let deleted = self.bid_dao.delete(id).await?;
        if deleted {
            info!("Bid deleted: {}", id);
        }
        Ok(deleted)
    }
}
