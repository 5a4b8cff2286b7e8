//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `user_service.rs`).

pub mod bid_service_impl;
pub mod category_service_impl;
pub mod condition_service_impl;
pub mod product_service_impl;
pub mod rating_service_impl;
pub mod user_service_impl;

pub use bid_service_impl::BidServiceImpl;
pub use category_service_impl::CategoryServiceImpl;
pub use condition_service_impl::ConditionServiceImpl;
pub use product_service_impl::ProductServiceImpl;
pub use rating_service_impl::RatingServiceImpl;
pub use user_service_impl::UserServiceImpl;
