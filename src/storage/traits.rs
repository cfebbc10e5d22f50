//! Abstract storage interface for pluggable user backends

use async_trait::async_trait;

use crate::core::user::{NewUser, User};
use crate::error::Result;

/// User data storage interface
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Initialize the storage backend (create tables, etc.)
    async fn initialize(&self) -> Result<()>;

    /// List every stored user, ascending by id
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Insert a user and return it with its assigned id.
    /// Fails with `Conflict` when username or email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Get user by ID
    async fn get_user(&self, user_id: i64) -> Result<Option<User>>;

    /// Delete a user, returning whether a record was removed
    async fn delete_user(&self, user_id: i64) -> Result<bool>;

    /// Health check for the storage backend
    async fn health_check(&self) -> Result<bool>;

    /// Release connections held by the backend
    async fn close(&self) {}
}
