//! Bid entity.

use super::{Product, User};
use crate::domain::value_objects::Currency;
use crate::{BidId, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An offer by a buyer on a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Bid {
    pub id: BidId,

    /// When the bid was placed.
    pub placed_at: DateTime<Utc>,

    /// Offered amount in minor currency units.
    #[validate(range(min = 0))]
    pub amount: i64,

    pub currency: Currency,

    #[validate(nested)]
    pub buyer: User,

    #[validate(nested)]
    pub product: Product,
}

impl Bid {
    /// Creates a bid placed now.
    #[must_use]
    pub fn new(buyer: User, product: Product, amount: i64, currency: Currency) -> Self {
        Self {
            id: BidId::new(),
            placed_at: Utc::now(),
            amount,
            currency,
            buyer,
            product,
        }
    }
}

impl Entity<BidId> for Bid {
    fn id(&self) -> &BidId {
        &self.id
    }
}
