//! Email value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;

/// Error type for email validation.
#[derive(Debug, Error)]
#[error("Invalid email address: {0}")]
pub struct EmailError(String);

/// Trimmed, lower-cased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Canonical stored form of an address: trimmed and lower-cased.
    ///
    /// Lookups normalise their argument the same way so they can compare
    /// against stored addresses directly.
    #[must_use]
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Creates a new Email after validating the format.
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = Self::normalize(&email.into());

        if !email.validate_email() {
            return Err(EmailError(email));
        }

        Ok(Self(email))
    }

    /// Wraps an address read back from the database without re-validating.
    #[must_use]
    pub fn new_unchecked(email: impl Into<String>) -> Self {
        Self(Self::normalize(&email.into()))
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_addresses_differ_only_by_case() {
        let registered = Email::new("Seller@Example.COM").unwrap();
        let login = Email::new("  seller@example.com ").unwrap();
        assert_eq!(registered, login);
        assert_eq!(registered.as_str(), "seller@example.com");
    }

    #[test]
    fn test_normalize_matches_stored_form() {
        let stored = Email::new("Bidder+Art@Gallery.org").unwrap();
        assert_eq!(Email::normalize(" BIDDER+art@gallery.ORG"), stored.as_str());
    }

    #[test]
    fn test_rejects_malformed_contact_addresses() {
        for raw in ["buyer", "@auction.test", "buyer@", "buyer at auction.test", ""] {
            assert!(Email::new(raw).is_err(), "{raw:?} accepted");
        }
    }

    #[test]
    fn test_database_rows_are_normalized_without_validation() {
        let email = Email::new_unchecked(" Legacy@Import ");
        assert_eq!(email.as_str(), "legacy@import");
    }

    #[test]
    fn test_user_payload_field() {
        let email: Email = serde_json::from_str("\"Ada@Example.com\"").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"ada@example.com\"");

        let err = serde_json::from_str::<Email>("\"nope\"").unwrap_err();
        assert!(err.to_string().contains("Invalid email address: nope"));
    }
}
