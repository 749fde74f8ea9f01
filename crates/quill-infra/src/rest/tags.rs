use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use quill_core::error::GatewayError;
use quill_core::ports::TagLinks;

use super::RestClient;

#[derive(Serialize)]
struct TagBatch<'a> {
    tags: &'a [i64],
}

/// Batched tag link/unlink adapter scoped to `posts/<id>/tags`.
pub struct RestTagLinks {
    client: RestClient,
}

impl RestTagLinks {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn path(post_id: i64) -> String {
        format!("posts/{post_id}/tags")
    }
}

#[async_trait]
impl TagLinks for RestTagLinks {
    async fn link_many(&self, post_id: i64, tag_ids: &[i64]) -> Result<(), GatewayError> {
        debug!(post_id, ?tag_ids, "linking tags");
        self.client
            .post_unit(&Self::path(post_id), &TagBatch { tags: tag_ids })
            .await
    }

    async fn unlink_many(&self, post_id: i64, tag_ids: &[i64]) -> Result<(), GatewayError> {
        debug!(post_id, ?tag_ids, "unlinking tags");
        self.client
            .delete_with_body(&Self::path(post_id), &TagBatch { tags: tag_ids })
            .await
    }
}
