//! Auth endpoint mapping: login, registration, logout, and identity lookup.
//!
//! Pure request/response translation with no owned state. The session
//! lifecycle built on top of these calls lives in [`crate::session`].

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Envelope, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserInfo};

/// The authentication surface of the backend.
pub trait AuthApi {
    /// `POST /api/auth/login` — exchange credentials for `{token, user}`.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<LoginResponse, ApiError>>;

    /// `POST /api/auth/register` — create an account. Never returns a token;
    /// the caller must sign in separately.
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl std::future::Future<Output = Result<RegisterResponse, ApiError>>;

    /// `POST /api/auth/logout` — best-effort server notification.
    fn logout(&self) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// `GET /api/auth/me` — identity for the presented token.
    fn me(&self) -> impl std::future::Future<Output = Result<UserInfo, ApiError>>;
}

impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/api/auth/login", &request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post("/api/auth/register", request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_ack("/api/auth/logout").await
    }

    async fn me(&self) -> Result<UserInfo, ApiError> {
        let envelope: Envelope<UserInfo> = self.get("/api/auth/me").await?;
        Ok(envelope.data)
    }
}
