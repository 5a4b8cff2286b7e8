//! Account type value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of account a user holds on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Can bid on products.
    #[default]
    Buyer,
    /// Can list products and bid.
    Seller,
    /// Platform administrator.
    Admin,
}

impl AccountType {
    /// Checks if the account may list products for sale.
    #[must_use]
    pub const fn can_sell(&self) -> bool {
        matches!(self, Self::Seller | Self::Admin)
    }

    /// Parses a stored value, falling back to [`AccountType::Buyer`].
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "seller" => Self::Seller,
            "admin" => Self::Admin,
            _ => Self::Buyer,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buyer => write!(f, "buyer"),
            Self::Seller => write!(f, "seller"),
            Self::Admin => write!(f, "admin"),
        }
    }
}
