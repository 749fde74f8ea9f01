use async_trait::async_trait;

use crate::error::GatewayError;
use crate::form::StagedCover;

/// Upload target for staged cover images.
#[async_trait]
pub trait CoverStore: Send + Sync {
    /// Uploads one staged cover per language for the given post, as a single
    /// batched operation.
    async fn upload_many(
        &self,
        post_id: i64,
        covers: &[(i64, StagedCover)],
    ) -> Result<(), GatewayError>;
}
