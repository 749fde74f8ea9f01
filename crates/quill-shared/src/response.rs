//! The backend's error envelope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned on any non-accepted status code.
///
/// Validation failures carry a field-level map; field paths follow the form
/// layout (`category_id`, `translations.0.title`, ...).
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{status} {title}")]
pub struct ErrorResponse {
    pub status: u16,

    /// A short, human-readable summary of the problem.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self { status, title: title.into(), detail: None, errors: BTreeMap::new() }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.entry(field.into()).or_default().push(message.into());
        self
    }

    pub fn has_field_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_validation_envelope() {
        let body = serde_json::json!({
            "status": 422,
            "title": "Validation Failed",
            "errors": {
                "category_id": ["required"],
                "translations.0.title": ["too short", "profanity"]
            }
        });

        let envelope: ErrorResponse = serde_json::from_value(body).unwrap();
        assert!(envelope.has_field_errors());
        assert_eq!(envelope.errors["translations.0.title"].len(), 2);
        assert_eq!(envelope.detail, None);
    }

    #[test]
    fn envelope_displays_as_status_and_title() {
        let envelope = ErrorResponse::new(401, "Unauthorized");

        assert_eq!(envelope.to_string(), "401 Unauthorized");
        // usable as a boxed error source
        let _: &dyn std::error::Error = &envelope;
    }

    #[test]
    fn builder_accumulates_field_errors() {
        let envelope = ErrorResponse::new(422, "Validation Failed")
            .with_field_error("slug", "taken")
            .with_field_error("slug", "reserved word");

        assert_eq!(envelope.errors["slug"].len(), 2);
    }
}
