//! Post editor save workflow.
//!
//! Mirrors the admin panel's detail screen: reference data is supplied up
//! front, a form is projected from the post, and `save` persists the entity
//! before reconciling covers and tags in one concurrent batch.
//!
//! The workflow is `Editing -> Saving -> {Success | Error}`, with a relation
//! sync sub-flow entered only after a successful core save.

use std::sync::Arc;

use futures::future::{try_join_all, BoxFuture};
use thiserror::Error;
use tracing::debug;

use crate::domain::{Category, Lang, Post, PostPayload, PostStatus, Tag, TagDiff};
use crate::error::{GatewayError, ValidationErrors};
use crate::form::PostForm;
use crate::ports::{CoverStore, EntityGateway, TagLinks};

/// The post gateway the editor saves through.
pub type PostGateway = dyn EntityGateway<Post, PostPayload>;

/// Pre-fetched reference data the editor is constructed with. The caller
/// plays the role of the route resolver and loads everything before the
/// editor exists.
#[derive(Debug, Clone, Default)]
pub struct EditorData {
    pub languages: Vec<Lang>,
    pub statuses: Vec<PostStatus>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub post: Option<Post>,
}

/// Outcome of a completed save, relations included.
#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    Created(Post),
    Updated(Post),
}

impl Saved {
    pub fn post(&self) -> &Post {
        match self {
            Saved::Created(post) | Saved::Updated(post) => post,
        }
    }
}

/// Errors out of a save attempt.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The core save was rejected; the field-level errors are also retained
    /// on the editor for display.
    #[error("the backend rejected the post")]
    Rejected(ValidationErrors),

    #[error(transparent)]
    Gateway(GatewayError),

    /// The post itself was saved, but at least one relation request failed;
    /// covers or tags may be out of sync with the carried post.
    #[error("post saved but relation sync failed")]
    RelationSync {
        post: Box<Post>,
        #[source]
        source: GatewayError,
    },
}

/// The post detail editor.
pub struct PostEditor {
    posts: Arc<PostGateway>,
    covers: Arc<dyn CoverStore>,
    tag_links: Arc<dyn TagLinks>,

    languages: Vec<Lang>,
    statuses: Vec<PostStatus>,
    categories: Vec<Category>,
    available_tags: Vec<Tag>,

    post: Post,
    pub form: PostForm,
    errors: ValidationErrors,
}

impl PostEditor {
    pub fn new(
        data: EditorData,
        posts: Arc<PostGateway>,
        covers: Arc<dyn CoverStore>,
        tag_links: Arc<dyn TagLinks>,
    ) -> Self {
        let post = data.post.unwrap_or_default();
        let form = PostForm::from_post(&post, &data.languages, &data.statuses);

        Self {
            posts,
            covers,
            tag_links,
            languages: data.languages,
            statuses: data.statuses,
            categories: data.categories,
            available_tags: data.tags,
            post,
            form,
            errors: ValidationErrors::new(),
        }
    }

    /// Whether this editor is in the create flow (the post has no identity).
    pub fn is_create(&self) -> bool {
        self.post.is_new()
    }

    pub fn title(&self) -> &'static str {
        if self.is_create() { "New post" } else { "Update post" }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn languages(&self) -> &[Lang] {
        &self.languages
    }

    pub fn statuses(&self) -> &[PostStatus] {
        &self.statuses
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn available_tags(&self) -> &[Tag] {
        &self.available_tags
    }

    /// Errors recorded against a top-level form field.
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Errors recorded against one translation's field,
    /// keyed `translations.<idx>.<field>` by the backend.
    pub fn translation_errors(&self, idx: usize, field: &str) -> &[String] {
        self.errors
            .get(&format!("translations.{idx}.{field}"))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_error(&self, field: &str) -> bool {
        !self.field_errors(field).is_empty()
    }

    pub fn has_translation_error(&self, idx: usize, field: &str) -> bool {
        !self.translation_errors(idx, field).is_empty()
    }

    /// Resets the create flow back to a blank form. A no-op in the update
    /// flow, where the form keeps tracking the loaded post.
    pub fn reset(&mut self) {
        if self.is_create() {
            self.post = Post::default();
            self.rebuild_form();
        }
    }

    /// Persists the post and reconciles its relations.
    ///
    /// The payload is shaped from the form (empty translations dropped), the
    /// entity created or updated by identity, and on success any needed
    /// cover uploads and tag link/unlink requests are issued concurrently
    /// and jointly awaited. With no relation work pending the save completes
    /// as soon as the core request does.
    pub async fn save(&mut self) -> Result<Saved, SaveError> {
        self.errors.clear();

        let payload = self.post.form_payload(&self.form);
        let was_create = self.is_create();

        let result = match self.post.id {
            None => self.posts.create(&payload).await,
            Some(id) => self.posts.update(id, &payload).await,
        };

        let saved = match result {
            Ok(post) => post,
            Err(GatewayError::Validation(errors)) => {
                self.errors = errors.clone();
                return Err(SaveError::Rejected(errors));
            }
            Err(err) => return Err(SaveError::Gateway(err)),
        };

        // relation sync runs against the saved copy, while the tag diff still
        // sees the pre-save post
        let sync = self.sync_relations(&saved).await;

        if was_create {
            self.post = Post::default();
        } else {
            self.post = saved.clone();
        }
        self.rebuild_form();

        match sync {
            Ok(()) => Ok(if was_create {
                Saved::Created(saved)
            } else {
                Saved::Updated(saved)
            }),
            Err(source) => Err(SaveError::RelationSync { post: Box::new(saved), source }),
        }
    }

    /// The tag sets to reconcile: on create every selected tag is an
    /// addition, on update the selection is diffed against the post's
    /// current tags.
    fn tags_to_update(&self) -> TagDiff {
        if self.is_create() {
            TagDiff { add: self.form.tags.clone(), delete: Vec::new() }
        } else {
            self.post.compare_tags(&self.form.tags)
        }
    }

    async fn sync_relations(&self, saved: &Post) -> Result<(), GatewayError> {
        let Some(post_id) = saved.id else {
            return Ok(());
        };

        let mut requests: Vec<BoxFuture<'_, Result<(), GatewayError>>> = Vec::new();

        let covers = self.form.staged_covers(saved);
        if !covers.is_empty() {
            let store = Arc::clone(&self.covers);
            requests.push(Box::pin(async move {
                store.upload_many(post_id, &covers).await
            }));
        }

        let diff = self.tags_to_update();
        if !diff.add.is_empty() {
            let links = Arc::clone(&self.tag_links);
            let add = diff.add;
            requests.push(Box::pin(
                async move { links.link_many(post_id, &add).await },
            ));
        }
        if !diff.delete.is_empty() {
            let links = Arc::clone(&self.tag_links);
            let delete = diff.delete;
            requests.push(Box::pin(async move {
                links.unlink_many(post_id, &delete).await
            }));
        }

        if requests.is_empty() {
            return Ok(());
        }

        debug!(post_id, requests = requests.len(), "syncing post relations");
        try_join_all(requests).await.map(|_| ())
    }

    fn rebuild_form(&mut self) {
        self.form = PostForm::from_post(&self.post, &self.languages, &self.statuses);
    }
}
