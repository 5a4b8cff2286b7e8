//! Condition data access.

use auction_core::{AuctionResult, Condition, ConditionId};
use async_trait::async_trait;

/// Condition data access object.
#[async_trait]
pub trait ConditionDao: Send + Sync {
    async fn add(&self, condition: &Condition) -> AuctionResult<bool>;

    /// Lists all conditions ordered by name.
    async fn find_all(&self) -> AuctionResult<Vec<Condition>>;

    async fn find_by_id(&self, id: ConditionId) -> AuctionResult<Option<Condition>>;

    async fn find_by_name(&self, name: &str) -> AuctionResult<Option<Condition>>;

    async fn update(&self, condition: &Condition) -> AuctionResult<bool>;

    async fn delete(&self, id: ConditionId) -> AuctionResult<bool>;
}
