//! Category service trait definition.

use auction_core::{AuctionResult, Category, CategoryId};
use async_trait::async_trait;

/// Category service trait.
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn add(&self, category: &Category) -> AuctionResult<bool>;

    async fn get_all(&self) -> AuctionResult<Vec<Category>>;

    async fn get_by_id(&self, id: CategoryId) -> AuctionResult<Option<Category>>;

    async fn get_by_name(&self, name: &str) -> AuctionResult<Option<Category>>;

    /// Lists the direct children of a category.
    async fn get_children(&self, parent_id: CategoryId) -> AuctionResult<Vec<Category>>;

    async fn update(&self, category: &Category) -> AuctionResult<bool>;

    async fn delete(&self, id: CategoryId) -> AuctionResult<bool>;
}
