//! Transient form projection of a post under edit.
//!
//! The form mirrors the post plus one sub-form per supported language. It is
//! UI-only state: discarded after a save or reset, never persisted.

use crate::domain::{Lang, Post, PostStatus};

/// A cover image staged for upload, one at most per language.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedCover {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Per-language sub-form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationForm {
    pub lang_id: Option<i64>,
    pub cover: Option<StagedCover>,
    pub cover_alt: Option<String>,
    pub title: String,
    pub slug: String,
    pub content: String,
}

impl TranslationForm {
    /// Sets the title and re-derives the slug. The slug is never edited
    /// directly.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.slug = slugify(&self.title);
    }
}

/// The whole editor form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub category_id: Option<i64>,
    pub post_status_id: Option<i64>,
    pub tags: Vec<i64>,
    pub translations: Vec<TranslationForm>,
}

impl PostForm {
    /// Projects a post into form state, one translation sub-form per
    /// supported language. A new post defaults to the status named "draft"
    /// when the reference data carries one.
    pub fn from_post(post: &Post, languages: &[Lang], statuses: &[PostStatus]) -> Self {
        let post_status_id = if post.is_new() {
            statuses.iter().find(|s| s.name == "draft").map(|s| s.id)
        } else {
            post.post_status_id
        };

        let translations = languages
            .iter()
            .map(|lang| {
                let translation = post.find_translation(lang.icu.as_str());

                TranslationForm {
                    lang_id: Some(lang.id),
                    cover: None,
                    cover_alt: translation.cover_alt,
                    title: translation.title,
                    slug: translation.slug,
                    content: translation.content,
                }
            })
            .collect();

        Self {
            category_id: post.category_id,
            post_status_id,
            tags: post.tag_ids(),
            translations,
        }
    }

    /// Mutable access to the sub-form for one language.
    pub fn translation_mut(&mut self, lang_id: i64) -> Option<&mut TranslationForm> {
        self.translations
            .iter_mut()
            .find(|t| t.lang_id == Some(lang_id))
    }

    /// Covers staged for upload, keyed by language id.
    ///
    /// A staged file whose language has no matching translation on the saved
    /// post is skipped; the backend has nothing to attach it to.
    pub fn staged_covers(&self, saved: &Post) -> Vec<(i64, StagedCover)> {
        self.translations
            .iter()
            .filter_map(|t| {
                let lang_id = t.lang_id?;
                let cover = t.cover.clone()?;

                if saved.find_translation(lang_id) == Default::default() {
                    return None;
                }

                Some((lang_id, cover))
            })
            .collect()
    }
}

/// Derives a URL slug from a title: lowercases, folds common accented latin
/// characters, drops apostrophes and collapses any other run of
/// non-alphanumerics into a single hyphen.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars().map(fold_accent) {
        let c = c.to_ascii_lowercase();

        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else if c == '\'' || c == '\u{2019}' {
            // apostrophes vanish instead of splitting the word
        } else {
            pending_hyphen = true;
        }
    }

    out
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' | 'ø' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Ö' | 'Õ' | 'Ø' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PostTranslation, Tag};

    fn languages() -> Vec<Lang> {
        vec![
            Lang { id: 1, icu: "en".into(), name: "English".into() },
            Lang { id: 2, icu: "fr".into(), name: "Français".into() },
        ]
    }

    fn statuses() -> Vec<PostStatus> {
        vec![
            PostStatus { id: 1, name: "draft".into() },
            PostStatus { id: 2, name: "published".into() },
        ]
    }

    #[test]
    fn slugify_folds_accents_and_collapses_separators() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Été à Montréal!  "), "ete-a-montreal");
        assert_eq!(slugify("L'heure d'été"), "lheure-dete");
        assert_eq!(slugify("foo --- bar"), "foo-bar");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn set_title_derives_the_slug() {
        let mut form = TranslationForm::default();
        form.set_title("Ça c'est passé");
        assert_eq!(form.slug, "ca-cest-passe");
    }

    #[test]
    fn new_post_defaults_to_draft_status() {
        let form = PostForm::from_post(&Post::default(), &languages(), &statuses());
        assert_eq!(form.post_status_id, Some(1));
        assert_eq!(form.translations.len(), 2);
        assert!(form.translations.iter().all(|t| t.title.is_empty()));
    }

    #[test]
    fn existing_post_keeps_its_status_and_tags() {
        let post = Post {
            id: Some(9),
            post_status_id: Some(2),
            tags: vec![Tag { id: 5, name: "news".into() }],
            translations: vec![PostTranslation {
                lang_id: Some(1),
                language: "en".into(),
                title: "Kept".into(),
                slug: "kept".into(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let form = PostForm::from_post(&post, &languages(), &statuses());
        assert_eq!(form.post_status_id, Some(2));
        assert_eq!(form.tags, vec![5]);
        assert_eq!(form.translations[0].title, "Kept");
        assert_eq!(form.translations[1].title, "");
    }

    #[test]
    fn staged_covers_skip_languages_without_a_saved_translation() {
        let saved = Post {
            id: Some(9),
            translations: vec![PostTranslation {
                lang_id: Some(1),
                language: "en".into(),
                title: "Kept".into(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let mut form = PostForm::from_post(&saved, &languages(), &statuses());
        let cover = StagedCover { file_name: "a.jpg".into(), bytes: vec![1, 2] };
        form.translation_mut(1).unwrap().cover = Some(cover.clone());
        form.translation_mut(2).unwrap().cover = Some(cover);

        let staged = form.staged_covers(&saved);
        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].0, 1);
    }
}
