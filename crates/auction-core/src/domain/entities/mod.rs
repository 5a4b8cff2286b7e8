//! Domain entities.

mod bid;
mod category;
mod condition;
mod product;
mod rating;
mod user;

pub use bid::Bid;
pub use category::Category;
pub use condition::Condition;
pub use product::{Product, ProductBuilder};
pub use rating::Rating;
pub use user::User;
