//! Post commands, including the create/edit save workflow.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};

use quill_core::editor::{EditorData, PostEditor, SaveError, Saved};
use quill_core::form::StagedCover;

use crate::state::AppState;

#[derive(Debug, Subcommand)]
pub enum PostCommand {
    /// List posts
    List,
    /// Dump one post as JSON
    Show { id: i64 },
    /// Create a post
    Create(EditArgs),
    /// Update an existing post
    Edit {
        id: i64,
        #[command(flatten)]
        args: EditArgs,
    },
    /// Delete a post
    Delete { id: i64 },
}

#[derive(Debug, Args, Default)]
pub struct EditArgs {
    /// Category id
    #[arg(long)]
    pub category: Option<i64>,

    /// Post status id
    #[arg(long)]
    pub status: Option<i64>,

    /// Selected tag ids (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<i64>,

    /// Language code the text flags below apply to
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Title; the slug is always derived from it
    #[arg(long)]
    pub title: Option<String>,

    /// Body content
    #[arg(long)]
    pub content: Option<String>,

    /// Cover image file to stage for upload
    #[arg(long)]
    pub cover: Option<PathBuf>,

    /// Cover alt text
    #[arg(long)]
    pub cover_alt: Option<String>,
}

impl EditArgs {
    fn touches_translation(&self) -> bool {
        self.title.is_some()
            || self.content.is_some()
            || self.cover.is_some()
            || self.cover_alt.is_some()
    }
}

pub async fn run(command: PostCommand, state: &AppState) -> anyhow::Result<()> {
    match command {
        PostCommand::List => list(state).await,
        PostCommand::Show { id } => show(state, id).await,
        PostCommand::Create(args) => edit(state, None, args).await,
        PostCommand::Edit { id, args } => edit(state, Some(id), args).await,
        PostCommand::Delete { id } => delete(state, id).await,
    }
}

async fn list(state: &AppState) -> anyhow::Result<()> {
    for post in state.posts.list().await? {
        let title = post
            .first_translation()
            .map(|t| t.title.as_str())
            .unwrap_or("(untitled)");
        let id = post.id.unwrap_or_default();

        println!("{}\t{}\t{}", id, title, post.username);
    }
    Ok(())
}

async fn show(state: &AppState, id: i64) -> anyhow::Result<()> {
    let post = state.posts.get(id).await?;
    println!("{}", serde_json::to_string_pretty(&post)?);
    Ok(())
}

async fn delete(state: &AppState, id: i64) -> anyhow::Result<()> {
    state.posts.delete(id).await?;
    println!("Post {id} deleted");
    Ok(())
}

/// The create/update flow: resolve reference data, project the form, apply
/// the flags and run the save workflow.
async fn edit(state: &AppState, id: Option<i64>, args: EditArgs) -> anyhow::Result<()> {
    let data = resolve_editor_data(state, id).await?;

    let mut editor = PostEditor::new(
        data,
        Arc::clone(&state.posts),
        Arc::clone(&state.covers),
        Arc::clone(&state.tag_links),
    );

    apply_args(&mut editor, &args)?;

    match editor.save().await {
        Ok(Saved::Created(post)) => {
            println!(
                "The post was successfully created (id {})",
                post.id.unwrap_or_default()
            );
            Ok(())
        }
        Ok(Saved::Updated(post)) => {
            println!(
                "The post was successfully updated (id {})",
                post.id.unwrap_or_default()
            );
            Ok(())
        }
        Err(SaveError::Rejected(errors)) => {
            eprintln!("The post was rejected:");
            for (field, messages) in &errors {
                for message in messages {
                    eprintln!("  {field}: {message}");
                }
            }
            anyhow::bail!("validation failed");
        }
        Err(SaveError::RelationSync { post, source }) => {
            tracing::warn!(error = %source, "relation sync failed after save");
            anyhow::bail!(
                "post {} was saved, but its covers or tags may be out of sync: {source}",
                post.id.unwrap_or_default()
            );
        }
        Err(err) => Err(err.into()),
    }
}

/// Plays the route-resolver role: everything the editor needs is fetched
/// before it is constructed, the reference lists concurrently.
async fn resolve_editor_data(state: &AppState, id: Option<i64>) -> anyhow::Result<EditorData> {
    let post = match id {
        Some(id) => Some(state.posts.get(id).await?),
        None => None,
    };

    let (languages, statuses, categories, tags) = futures::try_join!(
        state.languages.list(),
        state.statuses.list(),
        state.categories.list(),
        state.tags.list(),
    )?;

    Ok(EditorData { languages, statuses, categories, tags, post })
}

fn apply_args(editor: &mut PostEditor, args: &EditArgs) -> anyhow::Result<()> {
    if let Some(category) = args.category {
        editor.form.category_id = Some(category);
    }
    if let Some(status) = args.status {
        editor.form.post_status_id = Some(status);
    }
    if !args.tags.is_empty() {
        editor.form.tags = args.tags.clone();
    }

    if !args.touches_translation() {
        return Ok(());
    }

    let lang_id = editor
        .languages()
        .iter()
        .find(|lang| lang.icu == args.lang)
        .map(|lang| lang.id)
        .ok_or_else(|| anyhow::anyhow!("unknown language code: {}", args.lang))?;

    let translation = editor
        .form
        .translation_mut(lang_id)
        .ok_or_else(|| anyhow::anyhow!("no sub-form for language id {lang_id}"))?;

    if let Some(title) = &args.title {
        translation.set_title(title.clone());
    }
    if let Some(content) = &args.content {
        translation.content = content.clone();
    }
    if let Some(alt) = &args.cover_alt {
        translation.cover_alt = Some(alt.clone());
    }
    if let Some(path) = &args.cover {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cover".to_string());

        translation.cover = Some(StagedCover { file_name, bytes });
    }

    Ok(())
}
