//! Reference entities - read-only lookups supplied to the editor up front.

use serde::{Deserialize, Serialize};

/// Post category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Post tag, linked and unlinked in batches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Publication status (draft, published, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostStatus {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Supported content language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lang {
    pub id: i64,
    /// ICU language code, e.g. `en` or `fr-CA`.
    #[serde(default)]
    pub icu: String,
    #[serde(default)]
    pub name: String,
}
