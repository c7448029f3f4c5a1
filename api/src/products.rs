//! Product endpoint mapping under `/api/products/`.
//!
//! Pure request/response translation; the list cache that keeps local state
//! consistent with these calls lives in [`crate::inventory`].

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Envelope, InventoryItem, ItemDraft};

/// The inventory surface of the backend.
pub trait ProductsApi {
    /// `GET /api/products/` — the full collection.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<InventoryItem>, ApiError>>;

    /// `POST /api/products/` — create a record; the server assigns identity
    /// and stamps and returns the canonical record.
    fn create(
        &self,
        draft: &ItemDraft,
    ) -> impl std::future::Future<Output = Result<InventoryItem, ApiError>>;

    /// `PUT /api/products/{id}` — update a record; the returned record is
    /// authoritative for every field.
    fn update(
        &self,
        id: &str,
        draft: &ItemDraft,
    ) -> impl std::future::Future<Output = Result<InventoryItem, ApiError>>;

    /// `DELETE /api/products/{id}` — delete a record.
    fn delete(&self, id: &str) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

impl ProductsApi for ApiClient {
    async fn list(&self) -> Result<Vec<InventoryItem>, ApiError> {
        let envelope: Envelope<Vec<InventoryItem>> = self.get("/api/products/").await?;
        Ok(envelope.data)
    }

    async fn create(&self, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
        let envelope: Envelope<InventoryItem> = self.post("/api/products/", draft).await?;
        Ok(envelope.data)
    }

    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
        let envelope: Envelope<InventoryItem> =
            self.put(&format!("/api/products/{id}"), draft).await?;
        Ok(envelope.data)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        ApiClient::delete(self, &format!("/api/products/{id}")).await
    }
}
