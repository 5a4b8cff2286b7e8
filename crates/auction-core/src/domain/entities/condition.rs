//! Condition entity.

use crate::{ConditionId, Entity};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Item condition grade ("New", "Used", ...) with a numeric weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Condition {
    pub id: ConditionId,

    #[validate(length(min = 1, max = 15))]
    pub name: String,

    #[validate(length(max = 100))]
    pub description: String,

    pub value: i32,
}

impl Condition {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, value: i32) -> Self {
        Self {
            id: ConditionId::new(),
            name: name.into(),
            description: description.into(),
            value,
        }
    }
}

impl Entity<ConditionId> for Condition {
    fn id(&self) -> &ConditionId {
        &self.id
    }
}
