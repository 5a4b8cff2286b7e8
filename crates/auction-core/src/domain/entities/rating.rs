//! Rating entity.

use super::{Product, User};
use crate::{Entity, RatingId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Feedback one user leaves about another after a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Rating {
    pub id: RatingId,

    /// When the rating was submitted.
    pub date_and_time: DateTime<Utc>,

    /// Product the rating refers to.
    #[validate(nested)]
    pub product: Product,

    /// User giving the rating.
    #[validate(nested)]
    pub rating_user: User,

    /// User being rated.
    #[validate(nested)]
    pub rated_user: User,

    /// Grade between 0 and 10 inclusive.
    #[validate(range(min = 0, max = 10))]
    pub grade: i32,
}

impl Rating {
    /// Creates a rating timestamped now.
    #[must_use]
    pub fn new(product: Product, rating_user: User, rated_user: User, grade: i32) -> Self {
        Self {
            id: RatingId::new(),
            date_and_time: Utc::now(),
            product,
            rating_user,
            rated_user,
            grade,
        }
    }
}

impl Entity<RatingId> for Rating {
    fn id(&self) -> &RatingId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{AccountType, Email};
    use crate::{Category, ValidateExt};
    use chrono::Duration;

    fn user(username: &str) -> User {
        User::new(
            "Lee",
            "Park",
            username,
            Email::new(format!("{}@example.com", username)).unwrap(),
            "hash",
            AccountType::Buyer,
        )
    }

    fn rating(grade: i32) -> Rating {
        let now = Utc::now();
        let seller = user("seller");
        let product = Product::builder()
            .name("Bike")
            .description("Road bike")
            .category(Category::new("Sports"))
            .seller(seller.clone())
            .schedule(now, now + Duration::days(1))
            .build()
            .unwrap();
        Rating::new(product, user("buyer"), seller, grade)
    }

    #[test]
    fn test_grade_bounds() {
        assert!(rating(0).is_valid());
        assert!(rating(10).is_valid());
        assert!(!rating(-1).is_valid());
        assert!(!rating(11).is_valid());
    }

    #[test]
    fn test_timestamp_assigned_on_creation() {
        let before = Utc::now();
        let rating = rating(7);
        assert!(rating.date_and_time >= before);
    }

    #[test]
    fn test_invalid_rated_user_fails() {
        let mut rating = rating(5);
        rating.rated_user.username = String::new();
        let err = rating.validate_request().unwrap_err();
        assert!(err.to_string().contains("rated_user.username"));
    }
}
