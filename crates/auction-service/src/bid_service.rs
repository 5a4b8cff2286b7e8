//! Bid service trait definition.

use auction_core::{AuctionResult, Bid, BidId, ProductId, UserId};
use async_trait::async_trait;

/// Bid service trait.
#[async_trait]
pub trait BidService: Send + Sync {
    async fn add(&self, bid: &Bid) -> AuctionResult<bool>;

    async fn get_all(&self) -> AuctionResult<Vec<Bid>>;

    async fn get_by_id(&self, id: BidId) -> AuctionResult<Option<Bid>>;

    /// Lists bids on a product, highest first.
    async fn get_by_product(&self, product_id: ProductId) -> AuctionResult<Vec<Bid>>;

    async fn get_by_buyer(&self, buyer_id: UserId) -> AuctionResult<Vec<Bid>>;

    /// Returns the highest bid on a product, the earliest one on a tie.
    async fn highest_for_product(&self, product_id: ProductId) -> AuctionResult<Option<Bid>>;

    async fn update(&self, bid: &Bid) -> AuctionResult<bool>;

    async fn delete(&self, id: BidId) -> AuctionResult<bool>;
}
