//! # Session controller — the authentication state machine
//!
//! [`Session`] owns the authenticated-user value and the startup loading flag,
//! and decides which [`TokenStore`] area a fresh token lands in based on the
//! caller's remember-me preference. It moves through three states:
//!
//! ```text
//! Initializing ──resume(): no token, or token rejected──▶ Anonymous
//! Initializing ──resume(): stored token accepted────────▶ Authenticated
//! Anonymous ────sign_in() ok────────────────────────────▶ Authenticated
//! Anonymous ────sign_up() (any outcome)─────────────────▶ Anonymous
//! Authenticated ─sign_out() / global 401────────────────▶ Anonymous
//! ```
//!
//! `resume` runs exactly once at startup; `Initializing` is never re-entered.
//! The global 401 transition is driven by the transport's invalidation signal
//! (see [`crate::client::ApiClient::subscribe_invalidations`]) rather than an
//! explicit user action.
//!
//! Invariant: `user` is non-null only while a token exists in one of the two
//! storage areas; when both areas are empty, `user` is null.

use store::TokenStore;
use tokio::sync::RwLock;

use crate::auth::AuthApi;
use crate::error::ApiError;
use crate::models::{RegisterRequest, RegisterResponse, UserInfo};

/// Snapshot of the session state the presentation layer renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    /// True only during the startup resurrection attempt; never true again
    /// afterward.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Authentication state machine over an [`AuthApi`] backend.
pub struct Session<A: AuthApi> {
    api: A,
    tokens: TokenStore,
    state: RwLock<SessionState>,
}

impl<A: AuthApi> Session<A> {
    pub fn new(api: A, tokens: TokenStore) -> Self {
        Self {
            api,
            tokens,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Current state snapshot.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Current user, if authenticated.
    pub async fn user(&self) -> Option<UserInfo> {
        self.state.read().await.user.clone()
    }

    /// Attempt to resurrect a session from a stored token. Runs once at
    /// application start; resolves the loading flag either way.
    ///
    /// A stored token the backend no longer accepts is cleared immediately so
    /// later startups do not retry it.
    pub async fn resume(&self) -> SessionState {
        if self.tokens.read().is_none() {
            let mut state = self.state.write().await;
            state.loading = false;
            return state.clone();
        }

        match self.api.me().await {
            Ok(user) => {
                tracing::debug!(username = %user.username, "session resumed from stored token");
                let mut state = self.state.write().await;
                state.user = Some(user);
                state.loading = false;
                state.clone()
            }
            Err(err) => {
                tracing::debug!(%err, "stored token rejected, clearing it");
                self.tokens.clear();
                let mut state = self.state.write().await;
                state.user = None;
                state.loading = false;
                state.clone()
            }
        }
    }

    /// Sign in with credentials.
    ///
    /// On success the returned token is written to the area selected by
    /// `remember` and the user is set. On failure the state is left untouched
    /// and the error is returned for the form to display.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> Result<UserInfo, ApiError> {
        let response = self.api.login(email, password).await?;
        self.tokens.write(&response.token, remember);
        let mut state = self.state.write().await;
        state.user = Some(response.user.clone());
        Ok(response.user)
    }

    /// Create an account. Registration never authenticates: the session stays
    /// anonymous regardless of outcome, and the result is returned so the
    /// caller can prompt the user to sign in.
    pub async fn sign_up(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        self.api.register(&request).await
    }

    /// Sign out. The server call is best-effort; local teardown happens
    /// unconditionally so sign-out always succeeds.
    pub async fn sign_out(&self) {
        if let Err(err) = self.api.logout().await {
            tracing::warn!(%err, "server logout failed, tearing down locally anyway");
        }
        self.tokens.clear();
        self.state.write().await.user = None;
    }

    /// React to the global 401 signal: the transport already cleared stored
    /// credentials, so only the in-memory user remains to drop.
    pub async fn invalidate(&self) {
        self.tokens.clear();
        self.state.write().await.user = None;
    }
}
