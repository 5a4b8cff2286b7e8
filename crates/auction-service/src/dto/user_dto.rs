//! User-related DTOs.

use auction_core::{AccountType, AuctionError, AuctionResult, Email, User, UserId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub account_type: AccountType,
}

/// Full replacement of a user's profile. The password is only changed
/// when one is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub account_type: AccountType,
}

/// Credential check.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

fn parse_email(raw: &str) -> AuctionResult<Email> {
    Email::new(raw).map_err(|e| AuctionError::validation(format!("email: {}", e)))
}

impl CreateUserRequest {
    /// Builds a new user (without password hash) and returns it with the
    /// plain password.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::Validation`] for a malformed email.
    pub fn into_user(self) -> AuctionResult<(User, String)> {
        let mut user = User::new(
            self.first_name,
            self.last_name,
            self.username,
            parse_email(&self.email)?,
            String::new(),
            self.account_type,
        );
        user.phone = self.phone;
        Ok((user, self.password))
    }
}

impl UpdateUserRequest {
    /// Builds the replacement user for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AuctionError::Validation`] for a malformed email.
    pub fn into_user(self, id: UserId) -> AuctionResult<(User, Option<String>)> {
        let user = User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            phone: self.phone,
            email: parse_email(&self.email)?,
            password_hash: String::new(),
            account_type: self.account_type,
        };
        Ok((user, self.password))
    }
}
