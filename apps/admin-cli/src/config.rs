//! CLI configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the CMS REST API.
    pub api_url: String,
    /// Where the authenticated-user record is persisted.
    pub session_file: PathBuf,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("QUILL_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string()),
            session_file: env::var("QUILL_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
            http_timeout: Duration::from_secs(
                env::var("QUILL_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

fn default_session_file() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".quill-session.json")
}
