//! Session commands.

use clap::Args;

use quill_shared::dto::Credentials;

use crate::state::AppState;

#[derive(Debug, Args)]
pub struct CredentialArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,
}

impl From<CredentialArgs> for Credentials {
    fn from(args: CredentialArgs) -> Self {
        Credentials::new(args.username, args.password)
    }
}

pub async fn login(state: &AppState, args: CredentialArgs) -> anyhow::Result<()> {
    let user = state.auth.login(&args.into()).await?;
    println!("Logged in as {}", user.username);
    Ok(())
}

pub async fn logout(state: &AppState) -> anyhow::Result<()> {
    state.auth.logout().await?;
    println!("Logged out");
    Ok(())
}

pub async fn lock(state: &AppState) -> anyhow::Result<()> {
    state.auth.lock_session().await?;
    println!("Session locked");
    Ok(())
}

pub async fn unlock(state: &AppState, args: CredentialArgs) -> anyhow::Result<()> {
    let user = state.auth.unlock_session(&args.into()).await?;
    println!("Session unlocked for {}", user.username);
    Ok(())
}

pub async fn whoami(state: &AppState) -> anyhow::Result<()> {
    match state.auth.current_user().await? {
        None => println!("Not logged in"),
        Some(user) if user.is_session_locked() => {
            println!("{} (session locked)", user.username)
        }
        Some(user) => println!("{}", user.username),
    }
    Ok(())
}
