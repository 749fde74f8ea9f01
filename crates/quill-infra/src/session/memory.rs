//! In-memory session store - ephemeral, mostly for tests and embedding.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::User;
use quill_core::error::SessionError;
use quill_core::ports::SessionStore;

/// Holds the authenticated-user record in process memory.
/// The record is lost on restart.
pub struct InMemorySessionStore {
    slot: RwLock<Option<User>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self { slot: RwLock::new(None) }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<User>, SessionError> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, user: &User) -> Result<(), SessionError> {
        *self.slot.write().await = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.slot.write().await = None;
        Ok(())
    }
}
