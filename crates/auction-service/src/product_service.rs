//! Product service trait definition.

use auction_core::{AuctionResult, CategoryId, Product, ProductId, UserId};
use async_trait::async_trait;

/// Product service trait.
///
/// `add` and `update` reject a product whose description is a
/// near-duplicate of another product's description.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn add(&self, product: &Product) -> AuctionResult<bool>;

    async fn get_all(&self) -> AuctionResult<Vec<Product>>;

    async fn get_by_id(&self, id: ProductId) -> AuctionResult<Option<Product>>;

    async fn get_by_name(&self, name: &str) -> AuctionResult<Option<Product>>;

    async fn get_by_category(&self, category_id: CategoryId) -> AuctionResult<Vec<Product>>;

    async fn get_by_seller(&self, seller_id: UserId) -> AuctionResult<Vec<Product>>;

    async fn update(&self, product: &Product) -> AuctionResult<bool>;

    async fn delete(&self, id: ProductId) -> AuctionResult<bool>;
}
