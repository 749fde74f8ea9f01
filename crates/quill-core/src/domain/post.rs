use serde::{Deserialize, Serialize};

use crate::form::PostForm;

use super::Tag;

/// Post entity as returned by the backend.
///
/// `translations` is never absent after construction; a payload without the
/// field deserializes to an empty list. The value is only ever replaced
/// wholesale with the server's copy after a successful save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<i64>,
    pub category_id: Option<i64>,
    pub post_status_id: Option<i64>,
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub translations: Vec<PostTranslation>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<String>,
}

/// Per-language variant of a post's editable content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostTranslation {
    pub id: Option<i64>,
    pub post_id: Option<i64>,
    pub lang_id: Option<i64>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_alt: Option<String>,
}

/// Lookup key for a post translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LangKey<'a> {
    Id(i64),
    Code(&'a str),
}

impl From<i64> for LangKey<'_> {
    fn from(id: i64) -> Self {
        LangKey::Id(id)
    }
}

impl<'a> From<&'a str> for LangKey<'a> {
    fn from(code: &'a str) -> Self {
        LangKey::Code(code)
    }
}

/// Tag ids to link and unlink after a save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagDiff {
    pub add: Vec<i64>,
    pub delete: Vec<i64>,
}

impl TagDiff {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.delete.is_empty()
    }
}

/// Submission payload for a post create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPayload {
    pub category_id: Option<i64>,
    pub post_status_id: Option<i64>,
    pub translations: Vec<TranslationPayload>,
}

/// Submission payload for a single translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
    pub lang_id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_alt: Option<String>,
}

impl Post {
    /// Whether the post has been persisted yet; decides create vs update.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// The unique translation matching a numeric lang id or string language
    /// code. Returns an empty default when nothing matches.
    pub fn find_translation<'a>(&self, key: impl Into<LangKey<'a>>) -> PostTranslation {
        let key = key.into();

        self.translations
            .iter()
            .find(|t| match key {
                LangKey::Id(id) => t.lang_id == Some(id),
                LangKey::Code(code) => t.language == code,
            })
            .cloned()
            .unwrap_or_default()
    }

    pub fn first_translation(&self) -> Option<&PostTranslation> {
        self.translations.first()
    }

    /// Ids of the tags currently associated with the post.
    pub fn tag_ids(&self) -> Vec<i64> {
        self.tags.iter().map(|t| t.id).collect()
    }

    /// Shapes the raw form value into a submission payload.
    ///
    /// Translations where neither a title nor a slug was entered are dropped;
    /// the backend treats them as "language not filled in".
    pub fn form_payload(&self, form: &PostForm) -> PostPayload {
        let translations = form
            .translations
            .iter()
            .filter(|t| !t.title.is_empty() || !t.slug.is_empty())
            .map(|t| TranslationPayload {
                post_id: self.id,
                lang_id: t.lang_id,
                title: t.title.clone(),
                slug: t.slug.clone(),
                content: t.content.clone(),
                cover_alt: t.cover_alt.clone(),
            })
            .collect();

        PostPayload {
            category_id: form.category_id,
            post_status_id: form.post_status_id,
            translations,
        }
    }

    /// Diffs the selected tag ids against the post's current tags.
    pub fn compare_tags(&self, selected: &[i64]) -> TagDiff {
        let current = self.tag_ids();

        TagDiff {
            add: selected
                .iter()
                .filter(|id| !current.contains(id))
                .copied()
                .collect(),
            delete: current
                .iter()
                .filter(|id| !selected.contains(id))
                .copied()
                .collect(),
        }
    }
}
