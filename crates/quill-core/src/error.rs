//! Errors surfaced by the ports.

use std::collections::BTreeMap;

use thiserror::Error;

/// Field-level validation errors, keyed by field path.
///
/// Top-level fields use their name (`category_id`); translation fields are
/// addressed as `translations.<idx>.<field>`.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// Errors returned by the REST gateway ports.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {title}")]
    Status { status: u16, title: String },

    /// The backend rejected the payload with field-level errors.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(ValidationErrors),

    #[error("response decoding failed: {0}")]
    Decode(String),
}

/// Errors from the locally persisted session record.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage failed: {0}")]
    Storage(String),

    #[error("no authenticated user")]
    NotLoggedIn,
}
