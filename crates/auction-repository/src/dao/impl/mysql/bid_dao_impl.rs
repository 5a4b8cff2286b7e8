//! MySQL implementation of [`BidDao`].

use super::rows::{changed_or_exists, hydrate_bid, hydrate_bids, BidRow, BID_COLUMNS};
use crate::{BidDao, DatabasePoolInterface};
use auction_core::{AuctionResult, Bid, BidId, ProductId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// MySQL-backed bid DAO.
#[derive(Clone)]
pub struct MySqlBidDaoImpl {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlBidDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn find_many(&self, filter: &str, value: Option<String>) -> AuctionResult<Vec<Bid>> {
        let sql = format!(
            "SELECT {} FROM bids {} ORDER BY amount DESC, placed_at ASC",
            BID_COLUMNS, filter
        );
        let mut query = sqlx::query_as::<_, BidRow>(&sql);
        if let Some(value) = value {
            query = query.bind(value);
        }
        let rows = query.fetch_all(self.pool.inner()).await?;

        hydrate_bids(self.pool.inner(), rows).await
    }
}

#[async_trait]
impl BidDao for MySqlBidDaoImpl {
    async fn add(&self, bid: &Bid) -> AuctionResult<bool> {
        debug!("Adding bid of {} on product {}", bid.amount, bid.product.id);

        let result = sqlx::query(
            r#"
            INSERT INTO bids (id, placed_at, amount, currency, buyer_id, product_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(bid.id.to_string())
        .bind(bid.placed_at)
        .bind(bid.amount)
        .bind(bid.currency.code())
        .bind(bid.buyer.id.to_string())
        .bind(bid.product.id.to_string())
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_all(&self) -> AuctionResult<Vec<Bid>> {
        debug!("Finding all bids");
        self.find_many("", None).await
    }

    async fn find_by_id(&self, id: BidId) -> AuctionResult<Option<Bid>> {
        debug!("Finding bid by id: {}", id);

        let sql = format!("SELECT {} FROM bids WHERE id = ?", BID_COLUMNS);
        let row = sqlx::query_as::<_, BidRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        match row {
            Some(row) => Ok(Some(hydrate_bid(self.pool.inner(), row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_product(&self, product_id: ProductId) -> AuctionResult<Vec<Bid>> {
        debug!("Finding bids on product: {}", product_id);
        self.find_many("WHERE product_id = ?", Some(product_id.to_string()))
            .await
    }

    async fn find_highest_for_product(&self, product_id: ProductId) -> AuctionResult<Option<Bid>> {
        debug!("Finding highest bid on product: {}", product_id);

        let sql = format!(
            "SELECT {} FROM bids WHERE product_id = ? ORDER BY amount DESC, placed_at ASC LIMIT 1",
            BID_COLUMNS
        );
        let row = sqlx::query_as::<_, BidRow>(&sql)
            .bind(product_id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        match row {
            Some(row) => Ok(Some(hydrate_bid(self.pool.inner(), row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_buyer(&self, buyer_id: UserId) -> AuctionResult<Vec<Bid>> {
        debug!("Finding bids by buyer: {}", buyer_id);
        self.find_many("WHERE buyer_id = ?", Some(buyer_id.to_string()))
            .await
    }

    async fn update(&self, bid: &Bid) -> AuctionResult<bool> {
        debug!("Updating bid: {}", bid.id);

        let id = bid.id.to_string();
        let result = sqlx::query(
            r#"
            UPDATE bids
            SET placed_at = ?, amount = ?, currency = ?, buyer_id = ?, product_id = ?
            WHERE id = ?
            "#,
        )
        .bind(bid.placed_at)
        .bind(bid.amount)
        .bind(bid.currency.code())
        .bind(bid.buyer.id.to_string())
        .bind(bid.product.id.to_string())
        .bind(&id)
        .execute(self.pool.inner())
        .await?;

        changed_or_exists(self.pool.inner(), "bids", &id, result.rows_affected()).await
    }

    async fn delete(&self, id: BidId) -> AuctionResult<bool> {
        debug!("Deleting bid: {}", id);

        let result = sqlx::query("DELETE FROM bids WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlBidDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlBidDaoImpl").finish_non_exhaustive()
    }
}
