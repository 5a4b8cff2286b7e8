//! # Auction Core
//!
//! Core types, entities, and error definitions for the auction platform.
//! Every other crate in the workspace builds on the abstractions here:
//! typed identifiers, the unified [`AuctionError`], validation helpers,
//! and the domain entities (users, categories, products, bids, ratings,
//! conditions).

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;
