//! Typed identifiers from path segments.

use crate::responses::AppError;
use auction_core::AuctionError;
use std::fmt::Display;

/// Parses a path segment with one of the `*Id::parse` functions.
///
/// # Errors
///
/// Returns a validation error naming the resource for a malformed UUID.
pub fn parse_id<T, E: Display>(
    raw: &str,
    resource_type: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, AppError> {
    parse(raw).map_err(|_| {
        AppError(AuctionError::validation(format!(
            "Invalid {} ID: {}",
            resource_type, raw
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_core::ProductId;

    #[test]
    fn test_parse_valid_id() {
        let id = ProductId::new();
        assert_eq!(parse_id(&id.to_string(), "product", ProductId::parse).unwrap(), id);
    }

    #[test]
    fn test_parse_invalid_id() {
        let err = parse_id("12", "product", ProductId::parse).unwrap_err();
        assert!(err.0.to_string().contains("Invalid product ID: 12"));
    }
}
