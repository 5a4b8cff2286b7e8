//! User entity.

use crate::domain::value_objects::{AccountType, Email};
use crate::{Entity, UserId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered platform user, acting as buyer, seller, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Given name, capitalized.
    #[validate(
        length(min = 1, max = 15),
        custom(function = "crate::validation::rules::capitalized_word")
    )]
    pub first_name: String,

    /// Family name, capitalized.
    #[validate(
        length(min = 1, max = 15),
        custom(function = "crate::validation::rules::capitalized_word")
    )]
    pub last_name: String,

    /// Unique login name.
    #[validate(length(min = 1, max = 30))]
    pub username: String,

    /// Optional contact phone number.
    #[validate(
        length(max = 15),
        custom(function = "crate::validation::rules::phone_number")
    )]
    pub phone: Option<String>,

    /// Unique email address.
    pub email: Email,

    /// Argon2 hash of the password (never exposed via API).
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Account type.
    #[serde(default)]
    pub account_type: AccountType,
}

impl User {
    /// Creates a new user without a phone number.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
        email: Email,
        password_hash: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            id: UserId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: username.into(),
            phone: None,
            email,
            password_hash: password_hash.into(),
            account_type,
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}
