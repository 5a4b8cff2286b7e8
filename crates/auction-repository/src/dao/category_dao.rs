//! Category data access.

use auction_core::{AuctionResult, Category, CategoryId};
use async_trait::async_trait;

/// Category data access object.
#[async_trait]
pub trait CategoryDao: Send + Sync {
    /// Inserts a new category.
    async fn add(&self, category: &Category) -> AuctionResult<bool>;

    /// Lists all categories ordered by name.
    async fn find_all(&self) -> AuctionResult<Vec<Category>>;

    async fn find_by_id(&self, id: CategoryId) -> AuctionResult<Option<Category>>;

    async fn find_by_name(&self, name: &str) -> AuctionResult<Option<Category>>;

    /// Lists the direct children of a category ordered by name.
    async fn find_children(&self, parent_id: CategoryId) -> AuctionResult<Vec<Category>>;

    async fn update(&self, category: &Category) -> AuctionResult<bool>;

    /// Deletes a category. Children become root categories.
    async fn delete(&self, id: CategoryId) -> AuctionResult<bool>;
}
