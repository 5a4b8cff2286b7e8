//! User service trait definition.

use auction_core::{AuctionResult, User, UserId};
use async_trait::async_trait;

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validates the user, hashes `password` into it and stores it.
    async fn add(&self, user: User, password: &str) -> AuctionResult<bool>;

    async fn get_all(&self) -> AuctionResult<Vec<User>>;

    async fn get_by_id(&self, id: UserId) -> AuctionResult<Option<User>>;

    async fn get_by_email(&self, email: &str) -> AuctionResult<Option<User>>;

    async fn get_by_username(&self, username: &str) -> AuctionResult<Option<User>>;

    /// Returns the user only if the email exists and the password matches.
    async fn get_by_credentials(&self, email: &str, password: &str) -> AuctionResult<Option<User>>;

    /// Updates a user. The stored password hash is kept unless
    /// `new_password` is given.
    async fn update(&self, user: User, new_password: Option<&str>) -> AuctionResult<bool>;

    async fn delete(&self, id: UserId) -> AuctionResult<bool>;
}
