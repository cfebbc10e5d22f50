//! User directory operations on top of a storage backend

use std::sync::Arc;

use super::user::{NewUser, User};
use crate::error::{Result, UserDirectoryError};
use crate::storage::UserStorage;

/// CRUD service over the user store. Cheap to clone.
#[derive(Clone)]
pub struct UserDirectory {
    storage: Arc<dyn UserStorage>,
}

impl UserDirectory {
    pub fn new(storage: Arc<dyn UserStorage>) -> Self {
        Self { storage }
    }

    /// Every stored user in storage order
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.storage.list_users().await
    }

    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let user = self.storage.create_user(new_user).await?;
        log::info!("Created user {} ({})", user.id, user.username);
        Ok(user)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        self.storage
            .get_user(user_id)
            .await?
            .ok_or(UserDirectoryError::NotFound(user_id))
    }

    /// Removes a user. A second delete of the same id reports `NotFound`.
    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        if self.storage.delete_user(user_id).await? {
            log::info!("Deleted user {}", user_id);
            Ok(())
        } else {
            Err(UserDirectoryError::NotFound(user_id))
        }
    }

    pub async fn is_healthy(&self) -> bool {
        match self.storage.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                log::error!("Storage health check failed: {}", e);
                false
            }
        }
    }

    pub async fn close(&self) {
        self.storage.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteUserStorage;

    async fn directory() -> UserDirectory {
        UserDirectory::new(Arc::new(SqliteUserStorage::in_memory().await.unwrap()))
    }

    fn alice() -> NewUser {
        NewUser::new("alice".into(), "alice@example.com".into()).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let directory = directory().await;
        let created = directory.create_user(alice()).await.unwrap();

        let users = directory.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0], created);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_get_after_delete_is_not_found() {
        let directory = directory().await;
        let created = directory.create_user(alice()).await.unwrap();

        assert_eq!(directory.get_user(created.id).await.unwrap(), created);
        directory.delete_user(created.id).await.unwrap();

        assert!(matches!(
            directory.get_user(created.id).await,
            Err(UserDirectoryError::NotFound(id)) if id == created.id
        ));
        assert!(matches!(
            directory.delete_user(created.id).await,
            Err(UserDirectoryError::NotFound(_))
        ));
        assert!(directory.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let directory = directory().await;
        directory.create_user(alice()).await.unwrap();

        let again = NewUser::new("alice".into(), "alice2@example.com".into()).unwrap();
        assert!(matches!(
            directory.create_user(again).await,
            Err(UserDirectoryError::Conflict(_))
        ));
    }
}
