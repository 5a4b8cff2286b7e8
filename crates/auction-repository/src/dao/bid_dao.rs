//! Bid data access.

use auction_core::{AuctionResult, Bid, BidId, ProductId, UserId};
use async_trait::async_trait;

/// Bid data access object.
///
/// Lists are ordered by amount, highest first; ties go to the earlier bid.
#[async_trait]
pub trait BidDao: Send + Sync {
    async fn add(&self, bid: &Bid) -> AuctionResult<bool>;

    async fn find_all(&self) -> AuctionResult<Vec<Bid>>;

    async fn find_by_id(&self, id: BidId) -> AuctionResult<Option<Bid>>;

    async fn find_by_product(&self, product_id: ProductId) -> AuctionResult<Vec<Bid>>;

    /// The first bid of [`BidDao::find_by_product`], without loading the rest.
    async fn find_highest_for_product(&self, product_id: ProductId) -> AuctionResult<Option<Bid>>;

    async fn find_by_buyer(&self, buyer_id: UserId) -> AuctionResult<Vec<Bid>>;

    async fn update(&self, bid: &Bid) -> AuctionResult<bool>;

    async fn delete(&self, id: BidId) -> AuctionResult<bool>;
}
