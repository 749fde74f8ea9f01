//! Command definitions and dispatch.

mod auth;
mod post;
mod reference;

use clap::Subcommand;

use crate::state::AppState;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and persist the session record
    Login(auth::CredentialArgs),
    /// Delete the backend session and the stored record
    Logout,
    /// Lock the current session, keeping the stored record
    Lock,
    /// Unlock a locked session with re-entered credentials
    Unlock(auth::CredentialArgs),
    /// Show the stored session record
    Whoami,
    /// Manage posts
    #[command(subcommand)]
    Post(post::PostCommand),
    /// List categories
    Categories,
    /// List tags
    Tags,
    /// List post statuses
    Statuses,
    /// List languages
    Languages,
}

pub async fn run(command: Command, state: &AppState) -> anyhow::Result<()> {
    match command {
        Command::Login(args) => auth::login(state, args).await,
        Command::Logout => auth::logout(state).await,
        Command::Lock => auth::lock(state).await,
        Command::Unlock(args) => auth::unlock(state, args).await,
        Command::Whoami => auth::whoami(state).await,
        Command::Post(command) => post::run(command, state).await,
        Command::Categories => reference::categories(state).await,
        Command::Tags => reference::tags(state).await,
        Command::Statuses => reference::statuses(state).await,
        Command::Languages => reference::languages(state).await,
    }
}
