//! # Auction REST
//!
//! HTTP surface of the auction platform, built on Axum. Every entity gets
//! CRUD routes under `/api/v1`; health probes live at the root.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
