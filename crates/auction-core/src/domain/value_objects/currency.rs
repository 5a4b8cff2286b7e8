//! Currency value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned for an unsupported currency code.
#[derive(Debug, Error)]
#[error("Unsupported currency: {0}")]
pub struct CurrencyError(String);

/// ISO-4217 currencies accepted for prices and bids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Chf,
    Jpy,
}

impl Currency {
    /// Returns the three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
            Self::Jpy => "JPY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "CHF" => Ok(Self::Chf),
            "JPY" => Ok(Self::Jpy),
            _ => Err(CurrencyError(s.to_string())),
        }
    }
}
