//! # Auction Service
//!
//! Business logic layer for the auction platform. Each service wraps the
//! DAO for one entity, validates entities before writes and adds the
//! rules the storage layer cannot express: password hashing for users and
//! the near-duplicate check on product descriptions.

pub mod bid_service;
pub mod category_service;
pub mod condition_service;
pub mod dto;
pub mod r#impl;
pub mod password;
pub mod product_service;
pub mod rating_service;
pub mod similarity;
pub mod user_service;

#[cfg(test)]
mod test_support;

pub use bid_service::*;
pub use category_service::*;
pub use condition_service::*;
pub use dto::*;
pub use password::*;
pub use product_service::*;
pub use r#impl::*;
pub use rating_service::*;
pub use similarity::*;
pub use user_service::*;
