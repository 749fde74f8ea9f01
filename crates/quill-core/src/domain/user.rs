use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user record, persisted locally between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Bearer token handed out at login, when the backend uses one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

impl User {
    /// Marks the session locked; the record stays persisted so the user can
    /// unlock with re-entered credentials instead of logging in again.
    pub fn lock_session(&mut self) {
        self.is_locked = true;
    }

    pub fn unlock_session(&mut self) {
        self.is_locked = false;
    }

    pub fn is_session_locked(&self) -> bool {
        self.is_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_and_unlock_toggle_the_flag() {
        let mut user: User =
            serde_json::from_value(serde_json::json!({ "id": 1, "username": "staff" })).unwrap();

        assert!(!user.is_session_locked());
        user.lock_session();
        assert!(user.is_session_locked());
        user.unlock_session();
        assert!(!user.is_session_locked());
    }
}
