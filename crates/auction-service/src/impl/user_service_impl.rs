//! User service implementation.

use crate::password::{validate_password, PasswordHasher};
use crate::user_service::UserService;
use auction_core::{AuctionResult, User, UserId, ValidateExt};
use auction_repository::UserDao;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// User service over a [`UserDao`].
pub struct UserServiceImpl {
    user_dao: Arc<dyn UserDao>,
    password_hasher: PasswordHasher,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_dao: Arc<dyn UserDao>, password_hasher: PasswordHasher) -> Self {
        Self {
            user_dao,
            password_hasher,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn add(&self, mut user: User, password: &str) -> AuctionResult<bool> {
        debug!("Adding user: {}", user.username);

        user.validate_request()?;
        validate_password(password)?;
        user.password_hash = self.password_hasher.hash(password)?;

        let added = self.user_dao.add(&user).await?;
        if added {
            info!("User added: {}", user.id);
        }
        Ok(added)
    }

    async fn get_all(&self) -> AuctionResult<Vec<User>> {
        debug!("Listing users");
        self.user_dao.find_all().await
    }

    async fn get_by_id(&self, id: UserId) -> AuctionResult<Option<User>> {
        debug!("Getting user: {}", id);
        self.user_dao.find_by_id(id).await
    }

    async fn get_by_email(&self, email: &str) -> AuctionResult<Option<User>> {
        debug!("Getting user by email: {}", email);
        self.user_dao.find_by_email(email).await
    }

    async fn get_by_username(&self, username: &str) -> AuctionResult<Option<User>> {
        debug!("Getting user by username: {}", username);
        self.user_dao.find_by_username(username).await
    }

    async fn get_by_credentials(&self, email: &str, password: &str) -> AuctionResult<Option<User>> {
        debug!("Checking credentials for: {}", email);

        let Some(user) = self.user_dao.find_by_email(email).await? else {
            return Ok(None);
        };

        if self.password_hasher.verify(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    async fn update(&self, mut user: User, new_password: Option<&str>) -> AuctionResult<bool> {
        debug!("Updating user: {}", user.id);

        user.validate_request()?;

        let Some(existing) = self.user_dao.find_by_id(user.id).await? else {
            return Ok(false);
        };

        user.password_hash = match new_password {
            Some(password) => {
                validate_password(password)?;
                self.password_hasher.hash(password)?
            }
            None => existing.password_hash,
        };

        let updated = self.user_dao.update(&user).await?;
        if updated {
            info!("User updated: {}", user.id);
        }
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> AuctionResult<bool> {
        debug!("Deleting user: {}", id);

        let deleted = self.user_dao.delete(id).await?;
        if deleted {
            info!("User deleted: {}", id);
        }
        Ok(deleted)
    }
}
