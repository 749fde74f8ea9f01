//! JSON-file session store - the CLI's default persistence.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use quill_core::domain::User;
use quill_core::error::SessionError;
use quill_core::ports::SessionStore;

/// Persists the authenticated-user record as pretty-printed JSON at a fixed
/// path. A missing file reads as "not logged in".
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

fn storage(err: impl std::fmt::Display) -> SessionError {
    SessionError::Storage(err.to_string())
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn load(&self) -> Result<Option<User>, SessionError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map(Some).map_err(storage),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage(err)),
        }
    }

    async fn save(&self, user: &User) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(storage)?;
            }
        }

        let raw = serde_json::to_string_pretty(user).map_err(storage)?;
        tokio::fs::write(&self.path, raw).await.map_err(storage)
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> JsonFileSessionStore {
        let path = std::env::temp_dir().join(format!("quill-session-{}-{}.json", name, std::process::id()));
        JsonFileSessionStore::new(path)
    }

    fn staff_user() -> User {
        serde_json::from_value(serde_json::json!({ "id": 1, "username": "staff" })).unwrap()
    }

    #[tokio::test]
    async fn missing_file_reads_as_logged_out() {
        let store = temp_store("missing");
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn record_round_trips_through_disk() {
        let store = temp_store("roundtrip");
        store.save(&staff_user()).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.username, "staff");

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clearing_twice_is_harmless() {
        let store = temp_store("doubleclear");
        store.save(&staff_user()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
    }
}
