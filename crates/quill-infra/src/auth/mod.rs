//! Authentication client.
//!
//! Login, logout and session-lock flows over the backend's `auth` resource.
//! The returned user record is persisted through the session store; lock and
//! unlock mutate the stored record rather than any hidden singleton.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use quill_core::domain::User;
use quill_core::error::{GatewayError, SessionError};
use quill_core::ports::SessionStore;
use quill_shared::dto::Credentials;

use crate::rest::RestClient;

const RESOURCE: &str = "auth";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

pub struct AuthClient {
    client: RestClient,
    sessions: Arc<dyn SessionStore>,
}

impl AuthClient {
    pub fn new(client: RestClient, sessions: Arc<dyn SessionStore>) -> Self {
        Self { client, sessions }
    }

    /// Creates a session against the auth resource and persists the returned
    /// user record.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let user: User = self.client.post_json(RESOURCE, credentials).await?;
        self.sessions.save(&user).await?;

        info!(username = %user.username, "logged in");
        Ok(user)
    }

    /// Deletes the backend session, then clears the stored record whatever
    /// its lock state was.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.client.delete(RESOURCE).await?;
        self.sessions.clear().await?;

        info!("logged out");
        Ok(())
    }

    /// Deletes the backend session but keeps the stored record, marked
    /// locked, so the user can unlock with re-entered credentials.
    pub async fn lock_session(&self) -> Result<(), AuthError> {
        self.client.delete(RESOURCE).await?;

        let mut user = self
            .sessions
            .load()
            .await?
            .ok_or(SessionError::NotLoggedIn)?;
        user.lock_session();
        self.sessions.save(&user).await?;

        info!(username = %user.username, "session locked");
        Ok(())
    }

    /// Re-authenticates with fresh credentials and unlocks the stored
    /// record. Status codes are validated the same way as at login.
    pub async fn unlock_session(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let mut user: User = self.client.post_json(RESOURCE, credentials).await?;
        user.unlock_session();
        self.sessions.save(&user).await?;

        info!(username = %user.username, "session unlocked");
        Ok(user)
    }

    /// Pure read of the stored session state.
    pub async fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self.sessions.load().await?.is_some())
    }

    /// Pure read of the stored lock flag; false when nobody is logged in.
    pub async fn is_locked_out(&self) -> Result<bool, SessionError> {
        Ok(self
            .sessions
            .load()
            .await?
            .map(|user| user.is_session_locked())
            .unwrap_or(false))
    }

    /// The stored user record, when present.
    pub async fn current_user(&self) -> Result<Option<User>, SessionError> {
        self.sessions.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::InMemorySessionStore;

    fn offline_auth(sessions: Arc<dyn SessionStore>) -> AuthClient {
        // no request is issued by the session-state reads under test
        AuthClient::new(RestClient::new("http://cms.invalid/api"), sessions)
    }

    #[tokio::test]
    async fn session_state_reads_follow_the_store() {
        let sessions = Arc::new(InMemorySessionStore::new());
        let auth = offline_auth(sessions.clone());

        assert!(!auth.is_logged_in().await.unwrap());
        assert!(!auth.is_locked_out().await.unwrap());

        let mut user: User =
            serde_json::from_value(serde_json::json!({ "id": 1, "username": "staff" })).unwrap();
        sessions.save(&user).await.unwrap();
        assert!(auth.is_logged_in().await.unwrap());
        assert!(!auth.is_locked_out().await.unwrap());

        user.lock_session();
        sessions.save(&user).await.unwrap();
        assert!(auth.is_locked_out().await.unwrap());
        assert_eq!(auth.current_user().await.unwrap().unwrap().username, "staff");
    }
}
