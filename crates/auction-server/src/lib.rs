//! # Auction Server Library
//!
//! Start-up pieces of the server binary: logging set-up, wiring of DAOs
//! into services and the HTTP server loop.

pub mod app;
pub mod logging;
pub mod startup;
