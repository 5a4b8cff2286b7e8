//! User data access.

use auction_core::{AuctionResult, User, UserId};
use async_trait::async_trait;

/// User data access object.
#[async_trait]
pub trait UserDao: Send + Sync {
    /// Inserts a new user.
    async fn add(&self, user: &User) -> AuctionResult<bool>;

    /// Lists all users ordered by username.
    async fn find_all(&self) -> AuctionResult<Vec<User>>;

    async fn find_by_id(&self, id: UserId) -> AuctionResult<Option<User>>;

    /// Finds a user by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> AuctionResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AuctionResult<Option<User>>;

    /// Overwrites every column of an existing user, password hash included.
    async fn update(&self, user: &User) -> AuctionResult<bool>;

    async fn delete(&self, id: UserId) -> AuctionResult<bool>;
}
