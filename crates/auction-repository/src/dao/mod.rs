//! DAO (Data Access Object) layer.
//!
//! One trait per entity. Implementations are grouped by backing store
//! under [`r#impl`]; the [`crate::DaoFactory`] picks one at start-up.
//!
//! Conventions shared by every DAO:
//! - `add`, `update` and `delete` return `Ok(false)` when no row changed.
//! - single lookups return `Ok(None)` when nothing matches.
//! - `Err` is reserved for storage failures and constraint violations.

pub mod bid_dao;
pub mod category_dao;
pub mod condition_dao;
pub mod r#impl;
pub mod product_dao;
pub mod rating_dao;
pub mod user_dao;

pub use bid_dao::BidDao;
pub use category_dao::CategoryDao;
pub use condition_dao::ConditionDao;
pub use product_dao::ProductDao;
pub use rating_dao::RatingDao;
pub use user_dao::UserDao;

pub use r#impl::mysql::{
    MySqlBidDaoImpl, MySqlCategoryDaoImpl, MySqlConditionDaoImpl, MySqlProductDaoImpl,
    MySqlRatingDaoImpl, MySqlUserDaoImpl,
};
