//! Application state - shared wiring for every command.

use std::sync::Arc;

use quill_core::domain::{Category, Lang, Post, PostPayload, PostStatus, Tag};
use quill_core::ports::{CoverStore, EntityGateway, SessionStore, TagLinks};
use quill_infra::{
    AuthClient, JsonFileSessionStore, RestClient, RestCoverStore, RestResource, RestTagLinks,
};

use crate::config::AppConfig;

/// One gateway per resource plus the auth client, all over one shared
/// `RestClient` carrying the stored session token.
pub struct AppState {
    pub auth: AuthClient,
    pub sessions: Arc<dyn SessionStore>,
    pub posts: Arc<dyn EntityGateway<Post, PostPayload>>,
    pub covers: Arc<dyn CoverStore>,
    pub tag_links: Arc<dyn TagLinks>,
    pub categories: Arc<dyn EntityGateway<Category, ()>>,
    pub tags: Arc<dyn EntityGateway<Tag, ()>>,
    pub statuses: Arc<dyn EntityGateway<PostStatus, ()>>,
    pub languages: Arc<dyn EntityGateway<Lang, ()>>,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        let sessions: Arc<dyn SessionStore> =
            Arc::new(JsonFileSessionStore::new(&config.session_file));

        let mut client = RestClient::with_http(http, &config.api_url);
        if let Some(user) = sessions.load().await? {
            if let Some(token) = user.token {
                client = client.with_token(token);
            }
        }

        Ok(Self {
            auth: AuthClient::new(client.clone(), sessions.clone()),
            sessions,
            posts: Arc::new(RestResource::new(client.clone(), "posts")),
            covers: Arc::new(RestCoverStore::new(client.clone())),
            tag_links: Arc::new(RestTagLinks::new(client.clone())),
            categories: Arc::new(RestResource::new(client.clone(), "categories")),
            tags: Arc::new(RestResource::new(client.clone(), "tags")),
            statuses: Arc::new(RestResource::new(client.clone(), "post-statuses")),
            languages: Arc::new(RestResource::new(client, "languages")),
        })
    }
}
