//! MySQL implementation of [`RatingDao`].

use super::rows::{changed_or_exists, hydrate_rating, hydrate_ratings, RatingRow, RATING_COLUMNS};
use crate::{DatabasePoolInterface, RatingDao};
use auction_core::{AuctionResult, ProductId, Rating, RatingId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// MySQL-backed rating DAO.
#[derive(Clone)]
pub struct MySqlRatingDaoImpl {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlRatingDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn find_many(&self, filter: &str, value: Option<String>) -> AuctionResult<Vec<Rating>> {
        let sql = format!(
            "SELECT {} FROM ratings {} ORDER BY date_and_time DESC, id DESC",
            RATING_COLUMNS, filter
        );
        let mut query = sqlx::query_as::<_, RatingRow>(&sql);
        if let Some(value) = value {
            query = query.bind(value);
        }
        let rows = query.fetch_all(self.pool.inner()).await?;

        hydrate_ratings(self.pool.inner(), rows).await
    }
}

#[async_trait]
impl RatingDao for MySqlRatingDaoImpl {
    async fn add(&self, rating: &Rating) -> AuctionResult<bool> {
        debug!(
            "Adding rating from {} to {}",
            rating.rating_user.id, rating.rated_user.id
        );

        let result = sqlx::query(
            r#"
            INSERT INTO ratings (id, date_and_time, product_id, rating_user_id, rated_user_id, grade)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(rating.id.to_string())
        .bind(rating.date_and_time)
        .bind(rating.product.id.to_string())
        .bind(rating.rating_user.id.to_string())
        .bind(rating.rated_user.id.to_string())
        .bind(rating.grade)
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_all(&self) -> AuctionResult<Vec<Rating>> {
        debug!("Finding all ratings");
        self.find_many("", None).await
    }

    async fn find_by_id(&self, id: RatingId) -> AuctionResult<Option<Rating>> {
        debug!("Finding rating by id: {}", id);

        let sql = format!("SELECT {} FROM ratings WHERE id = ?", RATING_COLUMNS);
        let row = sqlx::query_as::<_, RatingRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        match row {
            Some(row) => Ok(Some(hydrate_rating(self.pool.inner(), row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_product(&self, product_id: ProductId) -> AuctionResult<Vec<Rating>> {
        debug!("Finding ratings for product: {}", product_id);
        self.find_many("WHERE product_id = ?", Some(product_id.to_string()))
            .await
    }

    async fn find_by_rated_user(&self, rated_user_id: UserId) -> AuctionResult<Vec<Rating>> {
        debug!("Finding ratings received by: {}", rated_user_id);
        self.find_many("WHERE rated_user_id = ?", Some(rated_user_id.to_string()))
            .await
    }

    async fn update(&self, rating: &Rating) -> AuctionResult<bool> {
        debug!("Updating rating: {}", rating.id);

        let id = rating.id.to_string();
        let result = sqlx::query(
            r#"
            UPDATE ratings
            SET date_and_time = ?, product_id = ?, rating_user_id = ?, rated_user_id = ?, grade = ?
            WHERE id = ?
            "#,
        )
        .bind(rating.date_and_time)
        .bind(rating.product.id.to_string())
        .bind(rating.rating_user.id.to_string())
        .bind(rating.rated_user.id.to_string())
        .bind(rating.grade)
        .bind(&id)
        .execute(self.pool.inner())
        .await?;

        changed_or_exists(self.pool.inner(), "ratings", &id, result.rows_affected()).await
    }

    async fn delete(&self, id: RatingId) -> AuctionResult<bool> {
        debug!("Deleting rating: {}", id);

        let result = sqlx::query("DELETE FROM ratings WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlRatingDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlRatingDaoImpl").finish_non_exhaustive()
    }
}
