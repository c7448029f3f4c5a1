//! # Wire models for the inventory backend
//!
//! Explicit schemas for every endpoint the client consumes. The backend wraps
//! product payloads in a `{"data": ...}` envelope ([`Envelope`]) and uses
//! MongoDB-style `_id` identifiers; serde rename attributes keep the Rust field
//! names idiomatic while matching the wire exactly. Responses that do not match
//! these shapes fail with a decode error instead of propagating missing fields.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Identity record for the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    pub email: String,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

/// Who created an inventory record, as stamped by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedBy {
    pub username: String,
    pub email: String,
}

/// A server-owned inventory record, mirrored client-side.
///
/// Identity and the `created_by`/timestamp stamps are assigned by the server
/// and never edited here; the editable subset lives in [`ItemDraft`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sku: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default, rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<CreatedBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl InventoryItem {
    /// Case-insensitive substring match over name, category, and SKU.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.sku.to_lowercase().contains(&query)
    }
}

/// The creatable/editable subset of an inventory record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sku: String,
    pub quantity: u32,
    pub price: f64,
}

impl ItemDraft {
    /// Required-field and non-negativity checks, run before any submission.
    ///
    /// Quantity is unsigned by construction, so only the name and price need
    /// checking here. The server remains authoritative for everything else.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("Please enter a product name".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ApiError::Validation(
                "Price cannot be negative".into(),
            ));
        }
        Ok(())
    }
}

/// `{"data": ...}` wrapper used by the products endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success payload of `POST /api/auth/login`.
///
/// A response without a token is a decode error, not a silent no-op: callers
/// can rely on `token` being present whenever login succeeds.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Created-account payload of `POST /api/auth/register`.
///
/// Deliberately tolerant: the backend owns this shape, and registration never
/// returns a token — signing in is a separate step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_decodes_from_backend_shape() {
        let body = r#"{
            "_id": "65a1",
            "name": "Widget A",
            "description": "",
            "category": "Tools",
            "sku": "W-1",
            "quantity": 4,
            "price": 9.99,
            "createdBy": {"username": "alice", "email": "a@x.com"},
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let item: InventoryItem = serde_json::from_str(body).unwrap();
        assert_eq!(item.id, "65a1");
        assert_eq!(item.created_by.as_ref().unwrap().username, "alice");
        assert!(item.updated_at.is_none());
    }

    #[test]
    fn test_draft_requires_name() {
        let draft = ItemDraft {
            name: "   ".into(),
            ..Default::default()
        };
        assert!(matches!(draft.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_draft_rejects_negative_price() {
        let draft = ItemDraft {
            name: "Widget".into(),
            price: -0.01,
            ..Default::default()
        };
        assert!(matches!(draft.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_draft_accepts_zero_values() {
        let draft = ItemDraft {
            name: "Widget".into(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_match_is_case_insensitive_across_fields() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"_id":"1","name":"Widget A","category":"Tools","sku":"W-1","quantity":1,"price":1.0}"#,
        )
        .unwrap();
        assert!(item.matches("w"));
        assert!(item.matches("TOOL"));
        assert!(item.matches("w-1"));
        assert!(!item.matches("gadget"));
    }
}
