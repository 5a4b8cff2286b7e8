//! Product entity.

use super::{Category, User};
use crate::domain::value_objects::Currency;
use crate::{AuctionError, AuctionResult, Entity, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A product listed for auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_schedule", skip_on_field_errors = false))]
pub struct Product {
    /// Unique identifier for the product.
    pub id: ProductId,

    /// Listing title.
    #[validate(length(min = 1, max = 250))]
    pub name: String,

    /// Free-text description.
    #[validate(length(min = 1, max = 500))]
    pub description: String,

    /// Category the product is listed in.
    #[validate(nested)]
    pub category: Category,

    /// Opening price in minor currency units.
    #[validate(range(min = 0))]
    pub starting_price: i64,

    /// Currency of `starting_price` and of bids on this product.
    pub currency: Currency,

    /// User selling the product.
    #[validate(nested)]
    pub seller: User,

    /// When the listing was created.
    pub creation_date: DateTime<Utc>,

    /// When bidding opens.
    pub start_date: DateTime<Utc>,

    /// When bidding closes. Always after `start_date`.
    pub end_date: DateTime<Utc>,

    /// When the auction was closed early, if it was.
    pub termination_date: Option<DateTime<Utc>>,
}

fn validate_schedule(product: &Product) -> Result<(), ValidationError> {
    if product.end_date <= product.start_date {
        let mut error = ValidationError::new("end_before_start");
        error.message = Some("end_date must be after start_date".into());
        return Err(error);
    }
    Ok(())
}

impl Product {
    /// Starts building a product.
    #[must_use]
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    /// Closes the auction early. A closed auction keeps its first
    /// termination date; returns `false` in that case.
    pub fn terminate(&mut self, at: DateTime<Utc>) -> bool {
        if self.termination_date.is_some() {
            return false;
        }
        self.termination_date = Some(at);
        true
    }
}

impl Entity<ProductId> for Product {
    fn id(&self) -> &ProductId {
        &self.id
    }
}

/// Builder for [`Product`]. `creation_date` is stamped at build time.
#[derive(Debug, Default)]
pub struct ProductBuilder {
    name: Option<String>,
    description: Option<String>,
    category: Option<Category>,
    starting_price: i64,
    currency: Currency,
    seller: Option<User>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl ProductBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn starting_price(mut self, starting_price: i64) -> Self {
        self.starting_price = starting_price;
        self
    }

    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    #[must_use]
    pub fn seller(mut self, seller: User) -> Self {
        self.seller = Some(seller);
        self
    }

    #[must_use]
    pub fn schedule(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    /// Builds the product. Field constraints are not checked here; call
    /// `validate` on the result.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::Validation`] if a required field was not set.
    pub fn build(self) -> AuctionResult<Product> {
        let missing = |field: &str| AuctionError::validation(format!("{}: required", field));

        Ok(Product {
            id: ProductId::new(),
            name: self.name.ok_or_else(|| missing("name"))?,
            description: self.description.ok_or_else(|| missing("description"))?,
            category: self.category.ok_or_else(|| missing("category"))?,
            starting_price: self.starting_price,
            currency: self.currency,
            seller: self.seller.ok_or_else(|| missing("seller"))?,
            creation_date: Utc::now(),
            start_date: self.start_date.ok_or_else(|| missing("start_date"))?,
            end_date: self.end_date.ok_or_else(|| missing("end_date"))?,
            termination_date: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{AccountType, Email};
    use crate::ValidateExt;
    use chrono::Duration;

    fn seller() -> User {
        User::new(
            "Ada",
            "Lovelace",
            "ada",
            Email::new("ada@example.com").unwrap(),
            "hash",
            AccountType::Seller,
        )
    }

    fn product(start: DateTime<Utc>, end: DateTime<Utc>) -> Product {
        Product::builder()
            .name("Analytical Engine")
            .description("Brass gears, lightly used")
            .category(Category::new("Machines"))
            .starting_price(10_000)
            .seller(seller())
            .schedule(start, end)
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_product() {
        let now = Utc::now();
        let product = product(now, now + Duration::days(7));
        assert!(product.is_valid());
        assert!(product.creation_date >= now);
        assert_eq!(product.currency, Currency::Usd);
    }

    #[test]
    fn test_end_not_after_start_fails() {
        let now = Utc::now();
        assert!(!product(now, now).is_valid());
        assert!(!product(now, now - Duration::hours(1)).is_valid());
    }

    #[test]
    fn test_schedule_error_is_reported_at_struct_level() {
        let now = Utc::now();
        let err = product(now, now).validate_request().unwrap_err();
        assert!(err.to_string().contains("end_date must be after start_date"));
    }

    #[test]
    fn test_negative_price_fails() {
        let now = Utc::now();
        let mut product = product(now, now + Duration::days(1));
        product.starting_price = -1;
        assert!(!product.is_valid());
        product.starting_price = 0;
        assert!(product.is_valid());
    }

    #[test]
    fn test_invalid_seller_fails() {
        let now = Utc::now();
        let mut product = product(now, now + Duration::days(1));
        product.seller.first_name = "ada".to_string();
        assert!(!product.is_valid());
    }

    #[test]
    fn test_invalid_category_fails() {
        let now = Utc::now();
        let mut product = product(now, now + Duration::days(1));
        product.category.name = "x".repeat(101);

        let err = product.validate_request().unwrap_err();
        assert!(err.to_string().contains("category.name"));
    }

    #[test]
    fn test_text_length_bounds() {
        let now = Utc::now();
        let mut product = product(now, now + Duration::days(1));
        product.name = "n".repeat(251);
        assert!(!product.is_valid());

        product.name = "n".repeat(250);
        product.description = "d".repeat(501);
        assert!(!product.is_valid());

        product.description = String::new();
        assert!(!product.is_valid());
    }

    #[test]
    fn test_builder_requires_fields() {
        let result = Product::builder().name("Lonely").build();
        assert!(matches!(result, Err(AuctionError::Validation(_))));
    }

    #[test]
    fn test_terminate_keeps_first_date() {
        let now = Utc::now();
        let mut product = product(now, now + Duration::hours(2));
        let closed_at = now + Duration::minutes(30);

        assert!(product.terminate(closed_at));
        assert!(!product.terminate(now + Duration::hours(1)));
        assert_eq!(product.termination_date, Some(closed_at));
    }
}
