use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::multipart;
use tracing::debug;

use quill_core::error::GatewayError;
use quill_core::form::StagedCover;
use quill_core::ports::CoverStore;

use super::RestClient;

/// Cover upload adapter: one multipart POST per staged language, issued
/// concurrently and jointly awaited.
pub struct RestCoverStore {
    client: RestClient,
}

impl RestCoverStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CoverStore for RestCoverStore {
    async fn upload_many(
        &self,
        post_id: i64,
        covers: &[(i64, StagedCover)],
    ) -> Result<(), GatewayError> {
        debug!(post_id, count = covers.len(), "uploading staged covers");

        let uploads = covers.iter().map(|(lang_id, cover)| {
            let client = self.client.clone();
            let lang_id = *lang_id;
            let cover = cover.clone();

            async move {
                let part = multipart::Part::bytes(cover.bytes).file_name(cover.file_name);
                let form = multipart::Form::new().part("picture", part);

                client
                    .post_multipart(&format!("posts/{post_id}/covers/{lang_id}"), form)
                    .await
            }
        });

        try_join_all(uploads).await.map(|_| ())
    }
}
