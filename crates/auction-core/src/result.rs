//! Result type aliases for the auction platform.

use crate::AuctionError;

/// A specialized `Result` type for auction operations.
pub type AuctionResult<T> = Result<T, AuctionError>;
