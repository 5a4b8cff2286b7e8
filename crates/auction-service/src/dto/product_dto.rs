//! Category, condition and product DTOs.

use auction_core::{
    AuctionResult, Category, CategoryId, Condition, ConditionId, Currency, Product, User, UserId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
}

impl CategoryRequest {
    #[must_use]
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            parent_id: self.parent_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub value: i32,
}

impl ConditionRequest {
    #[must_use]
    pub fn into_condition(self, id: ConditionId) -> Condition {
        Condition {
            id,
            name: self.name,
            description: self.description,
            value: self.value,
        }
    }
}

/// Product listing payload. Prices are in minor currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub category_id: CategoryId,
    pub seller_id: UserId,
    #[serde(default)]
    pub starting_price: i64,
    #[serde(default)]
    pub currency: Currency,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl ProductRequest {
    /// Builds a new listing from the resolved category and seller.
    ///
    /// # Errors
    ///
    /// Propagates builder errors for missing fields.
    pub fn into_product(self, category: Category, seller: User) -> AuctionResult<Product> {
        Product::builder()
            .name(self.name)
            .description(self.description)
            .category(category)
            .seller(seller)
            .starting_price(self.starting_price)
            .currency(self.currency)
            .schedule(self.start_date, self.end_date)
            .build()
    }

    /// Replaces the editable fields of `existing`. Creation and
    /// termination dates are kept.
    #[must_use]
    pub fn apply_to(self, existing: Product, category: Category, seller: User) -> Product {
        Product {
            name: self.name,
            description: self.description,
            category,
            seller,
            starting_price: self.starting_price,
            currency: self.currency,
            start_date: self.start_date,
            end_date: self.end_date,
            ..existing
        }
    }
}
