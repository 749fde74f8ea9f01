use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use quill_core::error::GatewayError;
use quill_core::ports::EntityGateway;

use super::RestClient;

/// Generic REST adapter for one resource.
///
/// The typed counterpart of the admin panel's shared base service: the
/// resource name picks the URL, the type parameters pick the model and the
/// payload, and every verb goes through the shared client's accepted-status
/// mapping.
pub struct RestResource<T, P> {
    client: RestClient,
    resource: &'static str,
    _marker: PhantomData<fn() -> (T, P)>,
}

impl<T, P> RestResource<T, P> {
    pub fn new(client: RestClient, resource: &'static str) -> Self {
        Self { client, resource, _marker: PhantomData }
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.resource, id)
    }
}

#[async_trait]
impl<T, P> EntityGateway<T, P> for RestResource<T, P>
where
    T: DeserializeOwned + Send + Sync + 'static,
    P: Serialize + Send + Sync + 'static,
{
    async fn list(&self) -> Result<Vec<T>, GatewayError> {
        self.client.get_json(self.resource).await
    }

    async fn get(&self, id: i64) -> Result<T, GatewayError> {
        self.client.get_json(&self.item_path(id)).await
    }

    async fn create(&self, payload: &P) -> Result<T, GatewayError> {
        self.client.post_json(self.resource, payload).await
    }

    async fn update(&self, id: i64, payload: &P) -> Result<T, GatewayError> {
        self.client.put_json(&self.item_path(id), payload).await
    }

    async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        self.client.delete(&self.item_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use quill_core::domain::{Post, PostPayload};

    use super::*;

    #[test]
    fn item_paths_scope_the_resource() {
        let resource: RestResource<Post, PostPayload> =
            RestResource::new(RestClient::new("http://cms.local/api"), "posts");

        assert_eq!(resource.item_path(42), "posts/42");
    }
}
