use crate::domain::repository::UserRepository;
use crate::domain::user::NewUser;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, trace};

/// Keeps inserted users in insertion order. Clones share the same storage.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    storage: Arc<RwLock<Vec<NewUser>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn users(&self) -> Vec<NewUser> {
        self.storage.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.storage.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.storage.read().await.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self), fields(username = %user.username, email = %user.email))]
    async fn insert_user(&self, user: &NewUser) -> Result<()> {
        trace!("Acquiring write lock for user storage");
        let mut storage = self.storage.write().await;
        storage.push(user.clone());
        debug!(rows = storage.len(), "User saved to memory storage");
        Ok(())
    }
}
