//! Value objects.

mod account_type;
mod currency;
mod email;

pub use account_type::AccountType;
pub use currency::{Currency, CurrencyError};
pub use email::{Email, EmailError};
