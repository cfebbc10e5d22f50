//! Shared service context handed to every request handler

use std::sync::Arc;

use super::directory::UserDirectory;
use crate::auth::TokenManager;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::storage::{SqliteUserStorage, UserStorage};

/// Everything a handler needs: the token signer and the user directory.
///
/// Built once at startup and torn down with [`AppContext::shutdown`].
#[derive(Clone)]
pub struct AppContext {
    token_manager: Arc<TokenManager>,
    directory: UserDirectory,
}

impl AppContext {
    pub fn new(token_manager: Arc<TokenManager>, storage: Arc<dyn UserStorage>) -> Self {
        Self {
            token_manager,
            directory: UserDirectory::new(storage),
        }
    }

    /// Connects the store from configuration and creates the users table if absent
    pub async fn initialize(config: &ServerConfig) -> Result<Self> {
        let storage =
            SqliteUserStorage::connect(&config.database_url, config.db_max_connections).await?;
        storage.initialize().await?;

        let token_manager = TokenManager::new(&config.jwt_secret, config.token_ttl);

        Ok(Self::new(Arc::new(token_manager), Arc::new(storage)))
    }

    pub fn token_manager(&self) -> Arc<TokenManager> {
        self.token_manager.clone()
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Closes the storage pool
    pub async fn shutdown(&self) {
        self.directory.close().await;
        log::info!("User store closed");
    }
}
