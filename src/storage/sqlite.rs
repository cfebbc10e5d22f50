//! SQLite-backed user storage
//!
//! Persists users in a single `users` table through a sqlx connection pool.
//! `sqlite::memory:` URLs are supported for tests and throwaway runs: the
//! pool then keeps exactly one connection alive for its whole lifetime, since
//! every new connection to `:memory:` would open a fresh, empty database.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use super::traits::UserStorage;
use crate::core::user::{NewUser, User};
use crate::error::{Result, UserDirectoryError};

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username VARCHAR(80) NOT NULL UNIQUE,
    email VARCHAR(120) NOT NULL UNIQUE
)";

pub struct SqliteUserStorage {
    pool: SqlitePool,
}

impl SqliteUserStorage {
    /// Opens a pool for `database_url`, creating the database file if missing
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                UserDirectoryError::Config(format!(
                    "Invalid database URL '{}': {}",
                    database_url, e
                ))
            })?
            .create_if_missing(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        log::info!("Connected to user store at {}", database_url);

        Ok(Self { pool })
    }

    /// Convenience constructor for an initialized in-memory store
    pub async fn in_memory() -> Result<Self> {
        let storage = Self::connect("sqlite::memory:", 1).await?;
        storage.initialize().await?;
        Ok(storage)
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl UserStorage for SqliteUserStorage {
    async fn initialize(&self) -> Result<()> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, username, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email) VALUES (?, ?) RETURNING id, username, email",
        )
        .bind(user.username())
        .bind(user.email())
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, username, email FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn delete_user(&self, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(sqlx::query("SELECT 1").execute(&self.pool).await.is_ok())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
