use async_trait::async_trait;

use crate::error::GatewayError;

/// Batched tag association endpoints, scoped to a post.
#[async_trait]
pub trait TagLinks: Send + Sync {
    async fn link_many(&self, post_id: i64, tag_ids: &[i64]) -> Result<(), GatewayError>;

    async fn unlink_many(&self, post_id: i64, tag_ids: &[i64]) -> Result<(), GatewayError>;
}
