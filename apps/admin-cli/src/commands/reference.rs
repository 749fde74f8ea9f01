//! Read-only listing commands for the reference resources.

use crate::state::AppState;

pub async fn categories(state: &AppState) -> anyhow::Result<()> {
    for category in state.categories.list().await? {
        println!("{}\t{}", category.id, category.name);
    }
    Ok(())
}

pub async fn tags(state: &AppState) -> anyhow::Result<()> {
    for tag in state.tags.list().await? {
        println!("{}\t{}", tag.id, tag.name);
    }
    Ok(())
}

pub async fn statuses(state: &AppState) -> anyhow::Result<()> {
    for status in state.statuses.list().await? {
        println!("{}\t{}", status.id, status.name);
    }
    Ok(())
}

pub async fn languages(state: &AppState) -> anyhow::Result<()> {
    for lang in state.languages.list().await? {
        println!("{}\t{}\t{}", lang.id, lang.icu, lang.name);
    }
    Ok(())
}
