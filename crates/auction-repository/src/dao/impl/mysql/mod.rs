//! MySQL DAO implementations using SQLx.

mod bid_dao_impl;
mod category_dao_impl;
mod condition_dao_impl;
mod product_dao_impl;
mod rating_dao_impl;
mod rows;
mod user_dao_impl;

pub use bid_dao_impl::MySqlBidDaoImpl;
pub use category_dao_impl::MySqlCategoryDaoImpl;
pub use condition_dao_impl::MySqlConditionDaoImpl;
pub use product_dao_impl::MySqlProductDaoImpl;
pub use rating_dao_impl::MySqlRatingDaoImpl;
pub use user_dao_impl::MySqlUserDaoImpl;
