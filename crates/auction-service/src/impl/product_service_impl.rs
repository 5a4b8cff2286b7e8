//! Product service implementation.

use crate::product_service::ProductService;
use crate::similarity::DescriptionRule;
use auction_core::{AuctionResult, CategoryId, Product, ProductId, UserId, ValidateExt};
use auction_repository::ProductDao;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Product service over a [`ProductDao`], enforcing unique-enough
/// descriptions.
pub struct ProductServiceImpl {
    product_dao: Arc<dyn ProductDao>,
    description_rule: DescriptionRule,
}

impl ProductServiceImpl {
    /// Creates a new product service.
    #[must_use]
    pub fn new(product_dao: Arc<dyn ProductDao>, description_rule: DescriptionRule) -> Self {
        Self {
            product_dao,
            description_rule,
        }
    }

    async fn check_description(&self, product: &Product) -> AuctionResult<()> {
        let existing = self.product_dao.find_descriptions().await?;
        self.description_rule
            .check(product.id, &product.description, &existing)
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn add(&self, product: &Product) -> AuctionResult<bool> {
        debug!("Adding product: {}", product.name);

        product.validate_request()?;
        self.check_description(product).await?;

        let added = self.product_dao.add(product).await?;
        if added {
            info!("Product added: {}", product.id);
        }
        Ok(added)
    }

    async fn get_all(&self) -> AuctionResult<Vec<Product>> {
        debug!("Listing products");
        self.product_dao.find_all().await
    }

    async fn get_by_id(&self, id: ProductId) -> AuctionResult<Option<Product>> {
        debug!("Getting product: {}", id);
        self.product_dao.find_by_id(id).await
    }

    async fn get_by_name(&self, name: &str) -> AuctionResult<Option<Product>> {
        debug!("Getting product by name: {}", name);
        self.product_dao.find_by_name(name).await
    }

    async fn get_by_category(&self, category_id: CategoryId) -> AuctionResult<Vec<Product>> {
        debug!("Listing products in category: {}", category_id);
        self.product_dao.find_by_category(category_id).await
    }

    async fn get_by_seller(&self, seller_id: UserId) -> AuctionResult<Vec<Product>> {
        debug!("Listing products sold by: {}", seller_id);
        self.product_dao.find_by_seller(seller_id).await
    }

    async fn update(&self, product: &Product) -> AuctionResult<bool> {
        debug!("Updating product: {}", product.id);

        product.validate_request()?;
        self.check_description(product).await?;

        let updated = self.product_dao.update(product).await?;
        if updated {
            info!("Product updated: {}", product.id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: ProductId) -> AuctionResult<bool> {
        debug!("Deleting product: {}", id);

        let deleted = self.product_dao.delete(id).await?;
        if deleted {
            info!("Product deleted: {}", id);
        }
        Ok(deleted)
    }
}
