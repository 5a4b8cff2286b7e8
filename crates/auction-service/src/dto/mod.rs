//! Request payloads and their conversion into entities.
//!
//! Requests carry ids for referenced entities; callers resolve those ids
//! and hand the loaded entities to the conversion methods.

mod bid_dto;
mod product_dto;
mod user_dto;

pub use bid_dto::*;
pub use product_dto::*;
pub use user_dto::*;
