use async_trait::async_trait;

use crate::error::GatewayError;

/// Generic REST gateway defining the CRUD verbs every resource supports.
///
/// `T` is the typed model responses map into; `P` the submission payload.
/// Read-only resources use `P = ()`. Implementations issue one HTTP call per
/// verb against `<base>/<resource>[/<id>]`; there is no caching and no retry.
#[async_trait]
pub trait EntityGateway<T, P>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, GatewayError>;

    async fn get(&self, id: i64) -> Result<T, GatewayError>;

    async fn create(&self, payload: &P) -> Result<T, GatewayError>;

    async fn update(&self, id: i64, payload: &P) -> Result<T, GatewayError>;

    async fn delete(&self, id: i64) -> Result<(), GatewayError>;
}
