//! MySQL implementation of [`ConditionDao`].

use super::rows::{changed_or_exists, convert_all, ConditionRow, CONDITION_COLUMNS};
use crate::{ConditionDao, DatabasePoolInterface};
use auction_core::{AuctionResult, Condition, ConditionId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// MySQL-backed condition DAO.
#[derive(Clone)]
pub struct MySqlConditionDaoImpl {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlConditionDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConditionDao for MySqlConditionDaoImpl {
    async fn add(&self, condition: &Condition) -> AuctionResult<bool> {
        debug!("Adding condition: {}", condition.name);

        let result = sqlx::query(
            "INSERT INTO conditions (id, name, description, value) VALUES (?, ?, ?, ?)",
        )
        .bind(condition.id.to_string())
        .bind(&condition.name)
        .bind(&condition.description)
        .bind(condition.value)
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_all(&self) -> AuctionResult<Vec<Condition>> {
        debug!("Finding all conditions");

        let sql = format!("SELECT {} FROM conditions ORDER BY name", CONDITION_COLUMNS);
        let rows = sqlx::query_as::<_, ConditionRow>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        convert_all(rows)
    }

    async fn find_by_id(&self, id: ConditionId) -> AuctionResult<Option<Condition>> {
        debug!("Finding condition by id: {}", id);

        let sql = format!("SELECT {} FROM conditions WHERE id = ?", CONDITION_COLUMNS);
        let row = sqlx::query_as::<_, ConditionRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Condition::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> AuctionResult<Option<Condition>> {
        debug!("Finding condition by name: {}", name);

        let sql = format!("SELECT {} FROM conditions WHERE name = ?", CONDITION_COLUMNS);
        let row = sqlx::query_as::<_, ConditionRow>(&sql)
            .bind(name)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Condition::try_from).transpose()
    }

    async fn update(&self, condition: &Condition) -> AuctionResult<bool> {
        debug!("Updating condition: {}", condition.id);

        let id = condition.id.to_string();
        let result =
            sqlx::query("UPDATE conditions SET name = ?, description = ?, value = ? WHERE id = ?")
                .bind(&condition.name)
                .bind(&condition.description)
                .bind(condition.value)
                .bind(&id)
                .execute(self.pool.inner())
                .await?;

        changed_or_exists(self.pool.inner(), "conditions", &id, result.rows_affected()).await
    }

    async fn delete(&self, id: ConditionId) -> AuctionResult<bool> {
        debug!("Deleting condition: {}", id);

        let result = sqlx::query("DELETE FROM conditions WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlConditionDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlConditionDaoImpl").finish_non_exhaustive()
    }
}
