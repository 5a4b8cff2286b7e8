//! REST API controllers, one per entity plus health probes.

pub mod bid_controller;
pub mod category_controller;
pub mod condition_controller;
pub mod health_controller;
pub mod product_controller;
pub mod rating_controller;
pub mod user_controller;

pub use health_controller::*;
