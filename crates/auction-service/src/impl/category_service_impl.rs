//! Category service implementation.

use crate::category_service::CategoryService;
use auction_core::{AuctionError, AuctionResult, Category, CategoryId, ValidateExt};
use auction_repository::CategoryDao;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Category service over a [`CategoryDao`].
pub struct CategoryServiceImpl {
    category_dao: Arc<dyn CategoryDao>,
}

impl CategoryServiceImpl {
    #[must_use]
    pub fn new(category_dao: Arc<dyn CategoryDao>) -> Self {
        Self { category_dao }
    }

    /// Rejects a parent that is the category itself or one of its descendants.
    async fn check_parent(&self, category: &Category) -> AuctionResult<()> {
        let mut visited = HashSet::new();
        let mut next = category.parent_id;

        while let Some(ancestor) = next {
            if ancestor == category.id {
                return Err(AuctionError::business_rule(format!(
                    "category {} cannot be its own ancestor",
                    category.id
                )));
            }
            if !visited.insert(ancestor) {
                warn!("Category chain above {} already loops at {}", category.id, ancestor);
                break;
            }
            next = self
                .category_dao
                .find_by_id(ancestor)
                .await?
                .and_then(|parent| parent.parent_id);
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn add(&self, category: &Category) -> AuctionResult<bool> {
        debug!("Adding category: {}", category.name);

        category.validate_request()?;
        self.check_parent(category).await?;
        let added = self.category_dao.add(category).await?;
        if added {
            info!("Category added: {}", category.id);
        }
        Ok(added)
    }

    async fn get_all(&self) -> AuctionResult<Vec<Category>> {
        self.category_dao.find_all().await
    }

    async fn get_by_id(&self, id: CategoryId) -> AuctionResult<Option<Category>> {
        debug!("Getting category: {}", id);
        self.category_dao.find_by_id(id).await
    }

    async fn get_by_name(&self, name: &str) -> AuctionResult<Option<Category>> {
        debug!("Getting category by name: {}", name);
        self.category_dao.find_by_name(name).await
    }

    async fn get_children(&self, parent_id: CategoryId) -> AuctionResult<Vec<Category>> {
        debug!("Listing children of category: {}", parent_id);
        self.category_dao.find_children(parent_id).await
    }

    async fn update(&self, category: &Category) -> AuctionResult<bool> {
        debug!("Updating category: {}", category.id);

        category.validate_request()?;
        self.check_parent(category).await?;
        let updated = self.category_dao.update(category).await?;
        if updated {
            info!("Category updated: {}", category.id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: CategoryId) -> AuctionResult<bool> {
        debug!("Deleting category: {}", id);

        let deleted = self.category_dao.delete(id).await?;
        if deleted {
            info!("Category deleted: {}", id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockCategories;
    use auction_core::AuctionError;

    #[tokio::test]
    async fn test_add_validates_name() {
        let mut dao = MockCategories::new();
        dao.expect_add().times(1).returning(|_| Ok(true));
        let service = CategoryServiceImpl::new(Arc::new(dao));

        assert!(service.add(&Category::new("Garden")).await.unwrap());
        assert!(matches!(
            service.add(&Category::new("")).await,
            Err(AuctionError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_get_children() {
        let root = Category::new("Garden");
        let tools = Category::child_of("Tools", &root);
        let root_id = root.id;

        let mut dao = MockCategories::new();
        let children = vec![tools.clone()];
        dao.expect_find_children()
            .withf(move |id| *id == root_id)
            .returning(move |_| Ok(children.clone()));

        let service = CategoryServiceImpl::new(Arc::new(dao));
        assert_eq!(service.get_children(root_id).await.unwrap(), vec![tools]);
    }

    #[tokio::test]
    async fn test_update_missing_returns_false() {
        let mut dao = MockCategories::new();
        dao.expect_update().returning(|_| Ok(false));

        let service = CategoryServiceImpl::new(Arc::new(dao));
        assert!(!service.update(&Category::new("Garden")).await.unwrap());
    }

    #[tokio::test]
    async fn test_self_parent_is_rejected() {
        let mut dao = MockCategories::new();
        dao.expect_update().never();
        let service = CategoryServiceImpl::new(Arc::new(dao));

        let mut garden = Category::new("Garden");
        garden.parent_id = Some(garden.id);

        assert!(matches!(
            service.update(&garden).await,
            Err(AuctionError::BusinessRule(_))
        ));
    }

    #[tokio::test]
    async fn test_descendant_parent_is_rejected() {
        // Garden -> Tools -> Shovels, then Garden re-parented under Shovels.
        let mut garden = Category::new("Garden");
        let tools = Category::child_of("Tools", &garden);
        let shovels = Category::child_of("Shovels", &tools);
        garden.parent_id = Some(shovels.id);

        let mut dao = MockCategories::new();
        let rows = vec![shovels.clone(), tools.clone()];
        dao.expect_find_by_id()
            .returning(move |id| Ok(rows.iter().find(|c| c.id == id).cloned()));
        dao.expect_update().never();
        let service = CategoryServiceImpl::new(Arc::new(dao));

        assert!(matches!(
            service.update(&garden).await,
            Err(AuctionError::BusinessRule(_))
        ));
    }

    #[tokio::test]
    async fn test_moving_under_unrelated_branch_is_accepted() {
        let garden = Category::new("Garden");
        let kitchen = Category::new("Kitchen");
        let mut tools = Category::child_of("Tools", &garden);
        tools.parent_id = Some(kitchen.id);

        let mut dao = MockCategories::new();
        let kitchen_row = kitchen.clone();
        dao.expect_find_by_id()
            .withf(move |id| *id == kitchen_row.id)
            .returning(move |_| Ok(Some(kitchen.clone())));
        dao.expect_update().times(1).returning(|_| Ok(true));
        let service = CategoryServiceImpl::new(Arc::new(dao));

        assert!(service.update(&tools).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_rejects_self_parent() {
        let mut dao = MockCategories::new();
        dao.expect_add().never();
        let service = CategoryServiceImpl::new(Arc::new(dao));

        let mut garden = Category::new("Garden");
        garden.parent_id = Some(garden.id);

        assert!(service.add(&garden).await.is_err());
    }
}
