use async_trait::async_trait;

use crate::domain::User;
use crate::error::SessionError;

/// Persistence of the locally stored authenticated-user record.
///
/// The storage medium is the adapter's concern; the domain only sees the
/// session value object.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<User>, SessionError>;

    async fn save(&self, user: &User) -> Result<(), SessionError>;

    async fn clear(&self) -> Result<(), SessionError>;
}
