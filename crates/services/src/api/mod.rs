//! Thin JSON client for the remote backend.
//!
//! `ApiClient` owns the base URL, the connection pool, and bearer-token
//! attachment; feature services (`auth`, `community`, `gallery`, `sessions`)
//! layer their endpoints on top of it. Failed responses carry the backend's
//! `{"error": "..."}` message when one is present.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use storage::{KeyValueStore, keys};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Shared HTTP client for the backend API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    /// Creates a client rooted at `base_url` (no trailing slash).
    ///
    /// The store is consulted per request for the current auth token, so a
    /// sign-in that lands after construction is picked up automatically.
    #[must_use]
    pub fn new(base_url: impl Into<String>, store: Arc<dyn KeyValueStore>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            store,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The current bearer token, if the user is signed in.
    ///
    /// A store read failure is treated as "no token": the request then goes
    /// out unauthenticated and the backend decides.
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        self.store.get_item(keys::TOKEN).ok().flatten()
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path));
        self.send(request).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body);
        self.send(request).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.http.post(self.url(path));
        self.send(request).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let request = self.http.post(self.url(path)).multipart(form);
        self.send(request).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(path));
        let response = self.with_auth(request).send().await?;
        self.check(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.with_auth(request).send().await?;
        let response = self.check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Turns a non-2xx response into `ApiError::Status`, preferring the
    /// backend's own error message over a bare status line.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("request failed with status {status}"),
        };
        debug!(%status, %message, "api request rejected");
        Err(ApiError::Status { status, message })
    }
}
