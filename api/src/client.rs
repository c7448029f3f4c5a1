//! # Authenticated HTTP client for the inventory backend
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] configured with the backend base
//! URL and the shared [`TokenStore`]. Every outgoing request is augmented with
//! an `Authorization: Bearer <token>` header when a token is stored; every
//! response is inspected before the caller sees it:
//!
//! - **401** — the stored token is no longer valid anywhere. The client clears
//!   the token store and bumps the session-invalidation channel, then returns
//!   [`ApiError::Unauthorized`]. Callers never get to handle a 401 themselves;
//!   navigation is the session owner's job (it subscribes via
//!   [`subscribe_invalidations`](ApiClient::subscribe_invalidations)).
//! - **403** — surfaced as [`ApiError::Forbidden`] without touching the
//!   session.
//! - Everything else propagates as-is for the call site to display.
//!
//! Each request is attempted exactly once; there is no retry logic and no
//! explicit timeout policy beyond the transport defaults.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use store::TokenStore;
use tokio::sync::watch;

use crate::error::ApiError;

/// HTTP client with bearer authentication and global 401 handling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: TokenStore,
    invalidated: Arc<watch::Sender<u64>>,
}

impl ApiClient {
    /// Create a client for the given backend origin.
    pub fn new(base_url: impl Into<String>, tokens: TokenStore) -> Self {
        let (invalidated, _) = watch::channel(0);
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
            invalidated: Arc::new(invalidated),
        }
    }

    /// The token store this client injects credentials from.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Subscribe to session invalidations.
    ///
    /// The value is a counter bumped on every 401; the session owner watches
    /// it and reacts by tearing down local state and navigating to sign-in.
    pub fn subscribe_invalidations(&self) -> watch::Receiver<u64> {
        self.invalidated.subscribe()
    }

    /// Authorization header value, when a token is stored.
    pub fn auth_header(&self) -> Option<String> {
        self.tokens.read().map(|token| format!("Bearer {token}"))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token, if any. Absent token means the request simply
    /// proceeds unauthenticated.
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.auth_header() {
            Some(header) => builder.header("Authorization", header),
            None => builder,
        }
    }

    /// Clear stored credentials and signal the session owner.
    fn invalidate_session(&self) {
        tracing::warn!("session invalidated by the backend, clearing stored token");
        self.tokens.clear();
        self.invalidated.send_modify(|n| *n += 1);
    }

    /// Check the response status, handling 401/403 centrally.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        if err.is_unauthorized() {
            self.invalidate_session();
        }
        Err(err)
    }

    /// Execute a request and decode its JSON body into `T`.
    ///
    /// A body that does not match the expected shape is a decode error, never
    /// a value with silently missing fields.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.check(request.send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Execute a request where only the acknowledgment matters.
    async fn execute_ack(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.check(request.send().await?).await?;
        Ok(())
    }

    /// GET request decoding a JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let request = self.with_auth(self.client.get(&url));
        self.execute(request).await
    }

    /// POST request with a JSON body, decoding a JSON response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let request = self.with_auth(self.client.post(&url).json(body));
        self.execute(request).await
    }

    /// POST request without a body, where only the acknowledgment matters.
    pub async fn post_ack(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let request = self.with_auth(self.client.post(&url));
        self.execute_ack(request).await
    }

    /// PUT request with a JSON body, decoding a JSON response.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let request = self.with_auth(self.client.put(&url).json(body));
        self.execute(request).await
    }

    /// DELETE request, where only the acknowledgment matters.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let request = self.with_auth(self.client.delete(&url));
        self.execute_ack(request).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc as StdArc;
    use store::{MemoryArea, StorageArea, TokenStore, TOKEN_KEY};

    fn make_client() -> (ApiClient, MemoryArea, MemoryArea) {
        let durable = MemoryArea::new();
        let ephemeral = MemoryArea::new();
        let tokens = TokenStore::new(
            StdArc::new(durable.clone()),
            StdArc::new(ephemeral.clone()),
        );
        (
            ApiClient::new("http://localhost:5000/", tokens),
            durable,
            ephemeral,
        )
    }

    #[test]
    fn test_auth_header_follows_token_store() {
        let (client, _, _) = make_client();
        assert!(client.auth_header().is_none());

        client.tokens().write("abc123", true);
        assert_eq!(client.auth_header().as_deref(), Some("Bearer abc123"));
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let (client, _, _) = make_client();
        assert_eq!(
            client.url("/api/products/"),
            "http://localhost:5000/api/products/"
        );
        assert_eq!(client.url("api/auth/me"), "http://localhost:5000/api/auth/me");
    }

    #[test]
    fn test_invalidation_clears_both_areas_and_signals() {
        let (client, durable, ephemeral) = make_client();
        durable.set(TOKEN_KEY, "stale");
        ephemeral.set(TOKEN_KEY, "staler");

        let mut rx = client.subscribe_invalidations();
        assert!(!rx.has_changed().unwrap());

        client.invalidate_session();

        assert!(durable.get(TOKEN_KEY).is_none());
        assert!(ephemeral.get(TOKEN_KEY).is_none());
        assert!(rx.has_changed().unwrap());
    }
}
