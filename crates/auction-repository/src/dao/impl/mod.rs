//! DAO implementations, grouped by backing store.

pub mod mysql;
