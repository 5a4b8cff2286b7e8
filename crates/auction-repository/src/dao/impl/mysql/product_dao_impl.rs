//! MySQL implementation of [`ProductDao`].

use super::rows::{
    changed_or_exists, hydrate_product, hydrate_products, parse_id, ProductRow, PRODUCT_COLUMNS,
};
use crate::{DatabasePoolInterface, ProductDao};
use auction_core::{AuctionResult, CategoryId, Product, ProductId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// MySQL-backed product DAO.
#[derive(Clone)]
pub struct MySqlProductDaoImpl {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductDaoImpl {
    /// Creates a new MySQL product DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn find_many(&self, filter: &str, value: Option<String>) -> AuctionResult<Vec<Product>> {
        let sql = format!(
            "SELECT {} FROM products {} ORDER BY creation_date DESC, id DESC",
            PRODUCT_COLUMNS, filter
        );
        let mut query = sqlx::query_as::<_, ProductRow>(&sql);
        if let Some(value) = value {
            query = query.bind(value);
        }
        let rows = query.fetch_all(self.pool.inner()).await?;

        hydrate_products(self.pool.inner(), rows).await
    }

    async fn find_one(&self, filter: &str, value: &str) -> AuctionResult<Option<Product>> {
        let sql = format!(
            "SELECT {} FROM products WHERE {} ORDER BY creation_date LIMIT 1",
            PRODUCT_COLUMNS, filter
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(value)
            .fetch_optional(self.pool.inner())
            .await?;

        match row {
            Some(row) => Ok(Some(hydrate_product(self.pool.inner(), row).await?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProductDao for MySqlProductDaoImpl {
    async fn add(&self, product: &Product) -> AuctionResult<bool> {
        debug!("Adding product: {}", product.name);

        let result = sqlx::query(
            r#"
            INSERT INTO products (id, name, description, category_id, starting_price, currency,
                                  seller_id, creation_date, start_date, end_date, termination_date)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.category.id.to_string())
        .bind(product.starting_price)
        .bind(product.currency.code())
        .bind(product.seller.id.to_string())
        .bind(product.creation_date)
        .bind(product.start_date)
        .bind(product.end_date)
        .bind(product.termination_date)
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_all(&self) -> AuctionResult<Vec<Product>> {
        debug!("Finding all products");
        self.find_many("", None).await
    }

    async fn find_by_id(&self, id: ProductId) -> AuctionResult<Option<Product>> {
        debug!("Finding product by id: {}", id);
        self.find_one("id = ?", &id.to_string()).await
    }

    async fn find_by_name(&self, name: &str) -> AuctionResult<Option<Product>> {
        debug!("Finding product by name: {}", name);
        self.find_one("name = ?", name).await
    }

    async fn find_by_category(&self, category_id: CategoryId) -> AuctionResult<Vec<Product>> {
        debug!("Finding products in category: {}", category_id);
        self.find_many("WHERE category_id = ?", Some(category_id.to_string()))
            .await
    }

    async fn find_by_seller(&self, seller_id: UserId) -> AuctionResult<Vec<Product>> {
        debug!("Finding products sold by: {}", seller_id);
        self.find_many("WHERE seller_id = ?", Some(seller_id.to_string()))
            .await
    }

    async fn find_descriptions(&self) -> AuctionResult<Vec<(ProductId, String)>> {
        debug!("Loading product descriptions");

        let rows: Vec<(String, String)> = sqlx::query_as("SELECT id, description FROM products")
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter()
            .map(|(id, description)| Ok((parse_id(&id, ProductId::parse)?, description)))
            .collect()
    }

    async fn update(&self, product: &Product) -> AuctionResult<bool> {
        debug!("Updating product: {}", product.id);

        let id = product.id.to_string();
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?, description = ?, category_id = ?, starting_price = ?, currency = ?,
                seller_id = ?, start_date = ?, end_date = ?, termination_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.category.id.to_string())
        .bind(product.starting_price)
        .bind(product.currency.code())
        .bind(product.seller.id.to_string())
        .bind(product.start_date)
        .bind(product.end_date)
        .bind(product.termination_date)
        .bind(&id)
        .execute(self.pool.inner())
        .await?;

        changed_or_exists(self.pool.inner(), "products", &id, result.rows_affected()).await
    }

    async fn delete(&self, id: ProductId) -> AuctionResult<bool> {
        debug!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlProductDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductDaoImpl").finish_non_exhaustive()
    }
}
