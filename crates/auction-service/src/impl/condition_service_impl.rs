//! Condition service implementation.

use crate::condition_service::ConditionService;
use auction_core::{AuctionResult, Condition, ConditionId, ValidateExt};
use auction_repository::ConditionDao;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Condition service over a [`ConditionDao`].
pub struct ConditionServiceImpl {
    condition_dao: Arc<dyn ConditionDao>,
}

impl ConditionServiceImpl {
    #[must_use]
    pub fn new(condition_dao: Arc<dyn ConditionDao>) -> Self {
        Self { condition_dao }
    }
}

#[async_trait]
impl ConditionService for ConditionServiceImpl {
    async fn add(&self, condition: &Condition) -> AuctionResult<bool> {
        debug!("Adding condition: {}", condition.name);

        condition.validate_request()?;
        let added = self.condition_dao.add(condition).await?;
        if added {
            info!("Condition added: {}", condition.id);
        }
        Ok(added)
    }

    async fn get_all(&self) -> AuctionResult<Vec<Condition>> {
        self.condition_dao.find_all().await
    }

    async fn get_by_id(&self, id: ConditionId) -> AuctionResult<Option<Condition>> {
        self.condition_dao.find_by_id(id).await
    }

    async fn get_by_name(&self, name: &str) -> AuctionResult<Option<Condition>> {
        debug!("Getting condition by name: {}", name);
        self.condition_dao.find_by_name(name).await
    }

    async fn update(&self, condition: &Condition) -> AuctionResult<bool> {
        debug!("Updating condition: {}", condition.id);

        condition.validate_request()?;
        let updated = self.condition_dao.update(condition).await?;
        if updated {
            info!("Condition updated: {}", condition.id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: ConditionId) -> AuctionResult<bool> {
        debug!("Deleting condition: {}", id);

        let deleted = self.condition_dao.delete(id).await?;
        if deleted {
            info!("Condition deleted: {}", id);
        }
        Ok(deleted)
    }
}
