//! MySQL implementation of [`CategoryDao`].

use super::rows::{changed_or_exists, convert_all, CategoryRow, CATEGORY_COLUMNS};
use crate::{CategoryDao, DatabasePoolInterface};
use auction_core::{AuctionResult, Category, CategoryId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// MySQL-backed category DAO.
#[derive(Clone)]
pub struct MySqlCategoryDaoImpl {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlCategoryDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryDao for MySqlCategoryDaoImpl {
    async fn add(&self, category: &Category) -> AuctionResult<bool> {
        debug!("Adding category: {}", category.name);

        let result = sqlx::query("INSERT INTO categories (id, name, parent_id) VALUES (?, ?, ?)")
            .bind(category.id.to_string())
            .bind(&category.name)
            .bind(category.parent_id.map(|id| id.to_string()))
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_all(&self) -> AuctionResult<Vec<Category>> {
        debug!("Finding all categories");

        let sql = format!("SELECT {} FROM categories ORDER BY name", CATEGORY_COLUMNS);
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        convert_all(rows)
    }

    async fn find_by_id(&self, id: CategoryId) -> AuctionResult<Option<Category>> {
        debug!("Finding category by id: {}", id);

        let sql = format!("SELECT {} FROM categories WHERE id = ?", CATEGORY_COLUMNS);
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> AuctionResult<Option<Category>> {
        debug!("Finding category by name: {}", name);

        let sql = format!("SELECT {} FROM categories WHERE name = ?", CATEGORY_COLUMNS);
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(name)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Category::try_from).transpose()
    }

    async fn find_children(&self, parent_id: CategoryId) -> AuctionResult<Vec<Category>> {
        debug!("Finding children of category: {}", parent_id);

        let sql = format!(
            "SELECT {} FROM categories WHERE parent_id = ? ORDER BY name",
            CATEGORY_COLUMNS
        );
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(parent_id.to_string())
            .fetch_all(self.pool.inner())
            .await?;

        convert_all(rows)
    }

    async fn update(&self, category: &Category) -> AuctionResult<bool> {
        debug!("Updating category: {}", category.id);

        let id = category.id.to_string();
        let result = sqlx::query("UPDATE categories SET name = ?, parent_id = ? WHERE id = ?")
            .bind(&category.name)
            .bind(category.parent_id.map(|id| id.to_string()))
            .bind(&id)
            .execute(self.pool.inner())
            .await?;

        changed_or_exists(self.pool.inner(), "categories", &id, result.rows_affected()).await
    }

    async fn delete(&self, id: CategoryId) -> AuctionResult<bool> {
        debug!("Deleting category: {}", id);

        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlCategoryDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlCategoryDaoImpl").finish_non_exhaustive()
    }
}
