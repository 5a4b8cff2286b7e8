//! Category entity.

use crate::{CategoryId, Entity};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product category. Categories form a tree through `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Category {
    /// Unique identifier for the category.
    pub id: CategoryId,

    /// Unique display name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Parent category, `None` for a root category.
    pub parent_id: Option<CategoryId>,
}

impl Category {
    /// Creates a new root category.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            parent_id: None,
        }
    }

    /// Creates a new category below `parent`.
    #[must_use]
    pub fn child_of(name: impl Into<String>, parent: &Category) -> Self {
        Self {
            parent_id: Some(parent.id),
            ..Self::new(name)
        }
    }

    /// Checks if this is a root category.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Entity<CategoryId> for Category {
    fn id(&self) -> &CategoryId {
        &self.id
    }
}
