//! Product data access.

use auction_core::{AuctionResult, CategoryId, Product, ProductId, UserId};
use async_trait::async_trait;

/// Product data access object.
///
/// Reads return products with their category and seller loaded.
#[async_trait]
pub trait ProductDao: Send + Sync {
    /// Inserts a new product. The category and seller must already exist.
    async fn add(&self, product: &Product) -> AuctionResult<bool>;

    /// Lists all products, newest first.
    async fn find_all(&self) -> AuctionResult<Vec<Product>>;

    async fn find_by_id(&self, id: ProductId) -> AuctionResult<Option<Product>>;

    /// Finds the first product with this exact name.
    async fn find_by_name(&self, name: &str) -> AuctionResult<Option<Product>>;

    /// Lists products in a category, newest first.
    async fn find_by_category(&self, category_id: CategoryId) -> AuctionResult<Vec<Product>>;

    /// Lists products sold by a user, newest first.
    async fn find_by_seller(&self, seller_id: UserId) -> AuctionResult<Vec<Product>>;

    /// Returns every product id with its description, without loading
    /// references.
    async fn find_descriptions(&self) -> AuctionResult<Vec<(ProductId, String)>>;

    async fn update(&self, product: &Product) -> AuctionResult<bool>;

    /// Deletes a product together with its bids and ratings.
    async fn delete(&self, id: ProductId) -> AuctionResult<bool>;
}
