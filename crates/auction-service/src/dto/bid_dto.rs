//! Bid and rating DTOs.

use auction_core::{Bid, Currency, Product, ProductId, Rating, User, UserId};
use serde::{Deserialize, Serialize};

/// Bid payload. The amount is in minor currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidRequest {
    pub buyer_id: UserId,
    pub product_id: ProductId,
    pub amount: i64,
    #[serde(default)]
    pub currency: Currency,
}

impl BidRequest {
    #[must_use]
    pub fn into_bid(self, buyer: User, product: Product) -> Bid {
        Bid::new(buyer, product, self.amount, self.currency)
    }

    /// Replaces the editable fields of `existing`, keeping its placement time.
    #[must_use]
    pub fn apply_to(self, existing: Bid, buyer: User, product: Product) -> Bid {
        Bid {
            amount: self.amount,
            currency: self.currency,
            buyer,
            product,
            ..existing
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRequest {
    pub product_id: ProductId,
    pub rating_user_id: UserId,
    pub rated_user_id: UserId,
    pub grade: i32,
}

impl RatingRequest {
    #[must_use]
    pub fn into_rating(self, product: Product, rating_user: User, rated_user: User) -> Rating {
        Rating::new(product, rating_user, rated_user, self.grade)
    }

    /// Replaces the editable fields of `existing`, keeping its timestamp.
    #[must_use]
    pub fn apply_to(
        self,
        existing: Rating,
        product: Product,
        rating_user: User,
        rated_user: User,
    ) -> Rating {
        Rating {
            product,
            rating_user,
            rated_user,
            grade: self.grade,
            ..existing
        }
    }
}
