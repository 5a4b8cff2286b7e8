//! # Auction Repository
//!
//! Data access for the auction platform.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductDao>        (DAO interface, one per entity)
//! MySqlProductDaoImpl             (DAO impl, MySQL via SQLx)
//!   ↓
//! MySQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                      ← DatabasePool, migrations
//!   factory.rs                   ← DaoFactory singleton
//!   dao/
//!     user_dao.rs ...            ← one trait per entity
//!     impl/
//!       mysql/
//!         rows.rs                ← row types, reference loading
//!         user_dao_impl.rs ...   ← MySqlUserDaoImpl ...
//! ```

pub mod dao;
pub mod factory;
pub mod pool;

pub use dao::*;
pub use factory::*;
pub use pool::*;
