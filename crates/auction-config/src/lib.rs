//! # Auction Config
//!
//! Configuration management for the auction platform.
//! Supports layered configuration from files and environment variables,
//! validated before use.

mod app_config;
mod loader;
mod provider;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use provider::*;
pub use validation::*;
