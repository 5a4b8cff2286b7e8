//! MySQL implementation of [`UserDao`].

use super::rows::{changed_or_exists, convert_all, UserRow, USER_COLUMNS};
use crate::{DatabasePoolInterface, UserDao};
use auction_core::{AuctionResult, Email, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// MySQL-backed user DAO.
#[derive(Clone)]
pub struct MySqlUserDaoImpl {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserDaoImpl {
    /// Creates a new MySQL user DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn find_one(&self, filter: &str, value: &str) -> AuctionResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE {}", USER_COLUMNS, filter);
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(User::try_from).transpose()
    }
}

#[async_trait]
impl UserDao for MySqlUserDaoImpl {
    async fn add(&self, user: &User) -> AuctionResult<bool> {
        debug!("Adding user: {}", user.username);

        let result = sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, username, phone, email,
                               password_hash, account_type)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.phone)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.account_type.to_string())
        .execute(self.pool.inner())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_all(&self) -> AuctionResult<Vec<User>> {
        debug!("Finding all users");

        let sql = format!("SELECT {} FROM users ORDER BY username", USER_COLUMNS);
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        convert_all(rows)
    }

    async fn find_by_id(&self, id: UserId) -> AuctionResult<Option<User>> {
        debug!("Finding user by id: {}", id);
        self.find_one("id = ?", &id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> AuctionResult<Option<User>> {
        debug!("Finding user by email: {}", email);
        self.find_one("email = ?", &Email::normalize(email)).await
    }

    async fn find_by_username(&self, username: &str) -> AuctionResult<Option<User>> {
        debug!("Finding user by username: {}", username);
        self.find_one("username = ?", username).await
    }

    async fn update(&self, user: &User) -> AuctionResult<bool> {
        debug!("Updating user: {}", user.id);

        let id = user.id.to_string();
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = ?, last_name = ?, username = ?, phone = ?, email = ?,
                password_hash = ?, account_type = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.phone)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.account_type.to_string())
        .bind(&id)
        .execute(self.pool.inner())
        .await?;

        changed_or_exists(self.pool.inner(), "users", &id, result.rows_affected()).await
    }

    async fn delete(&self, id: UserId) -> AuctionResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlUserDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserDaoImpl").finish_non_exhaustive()
    }
}
