//! Shared REST client.
//!
//! Owns the base URL, the bearer session token, and the accepted-status
//! contract every resource call goes through. Non-accepted responses are
//! shaped into [`GatewayError`] values instead of panicking; validation
//! envelopes surface their field-level error map.

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use quill_core::error::GatewayError;
use quill_shared::ErrorResponse;

/// Status codes the backend uses for successful resource calls.
const ACCEPTED_STATUSES: [u16; 4] = [200, 201, 202, 204];

/// Thin wrapper around `reqwest::Client` scoped to one backend.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Builds on a preconfigured `reqwest::Client` (timeouts, proxies, ...).
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url, token: None }
    }

    /// Attaches the session's bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn dispatch(&self, req: reqwest::RequestBuilder) -> Result<Response, GatewayError> {
        let resp = req
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let status = resp.status();

        debug!(status = status.as_u16(), url = %resp.url(), "backend response");

        if !is_accepted(status) {
            let body = resp.text().await.unwrap_or_default();
            return Err(shape_error(status, &body));
        }

        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, GatewayError> {
        resp.json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, GatewayError> {
        let resp = self.dispatch(self.request(Method::GET, path)).await?;
        Self::decode(resp).await
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .dispatch(self.request(Method::POST, path).json(body))
            .await?;
        Self::decode(resp).await
    }

    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .dispatch(self.request(Method::PUT, path).json(body))
            .await?;
        Self::decode(resp).await
    }

    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        self.dispatch(self.request(Method::POST, path).json(body))
            .await
            .map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.dispatch(self.request(Method::DELETE, path))
            .await
            .map(|_| ())
    }

    pub(crate) async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        self.dispatch(self.request(Method::DELETE, path).json(body))
            .await
            .map(|_| ())
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<(), GatewayError> {
        self.dispatch(self.request(Method::POST, path).multipart(form))
            .await
            .map(|_| ())
    }
}

fn is_accepted(status: StatusCode) -> bool {
    ACCEPTED_STATUSES.contains(&status.as_u16())
}

/// Maps a non-accepted response body into a gateway error. A parseable
/// envelope with field errors becomes a validation error; anything else a
/// plain status error.
fn shape_error(status: StatusCode, body: &str) -> GatewayError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) if envelope.has_field_errors() => GatewayError::Validation(envelope.errors),
        Ok(envelope) => GatewayError::Status {
            status: status.as_u16(),
            title: envelope.detail.unwrap_or(envelope.title),
        },
        Err(_) => GatewayError::Status {
            status: status.as_u16(),
            title: status
                .canonical_reason()
                .unwrap_or("unrecognized status")
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_duplicate_slashes() {
        let client = RestClient::new("http://cms.local/api/");
        assert_eq!(client.url("/posts/3"), "http://cms.local/api/posts/3");
        assert_eq!(client.url("posts"), "http://cms.local/api/posts");
    }

    #[test]
    fn accepted_statuses_match_the_backend_contract() {
        assert!(is_accepted(StatusCode::OK));
        assert!(is_accepted(StatusCode::CREATED));
        assert!(is_accepted(StatusCode::NO_CONTENT));
        assert!(!is_accepted(StatusCode::FOUND));
        assert!(!is_accepted(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[test]
    fn validation_envelopes_surface_field_errors() {
        let body = r#"{
            "status": 422,
            "title": "Validation Failed",
            "errors": { "translations.1.slug": ["taken"] }
        }"#;

        match shape_error(StatusCode::UNPROCESSABLE_ENTITY, body) {
            GatewayError::Validation(errors) => {
                assert_eq!(errors["translations.1.slug"], vec!["taken".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn envelope_without_field_errors_becomes_a_status_error() {
        let body = r#"{ "status": 401, "title": "Unauthorized" }"#;

        match shape_error(StatusCode::UNAUTHORIZED, body) {
            GatewayError::Status { status, title } => {
                assert_eq!(status, 401);
                assert_eq!(title, "Unauthorized");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_bodies_fall_back_to_the_canonical_reason() {
        match shape_error(StatusCode::BAD_GATEWAY, "<html>oops</html>") {
            GatewayError::Status { status, title } => {
                assert_eq!(status, 502);
                assert_eq!(title, "Bad Gateway");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
