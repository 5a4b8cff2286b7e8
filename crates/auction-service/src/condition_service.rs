//! Condition service trait definition.

use auction_core::{AuctionResult, Condition, ConditionId};
use async_trait::async_trait;

/// Condition service trait.
#[async_trait]
pub trait ConditionService: Send + Sync {
    async fn add(&self, condition: &Condition) -> AuctionResult<bool>;

    async fn get_all(&self) -> AuctionResult<Vec<Condition>>;

    async fn get_by_id(&self, id: ConditionId) -> AuctionResult<Option<Condition>>;

    async fn get_by_name(&self, name: &str) -> AuctionResult<Option<Condition>>;

    async fn update(&self, condition: &Condition) -> AuctionResult<bool>;

    async fn delete(&self, id: ConditionId) -> AuctionResult<bool>;
}
