//! # Inventory list cache
//!
//! [`Inventory`] owns the in-memory ordered collection of inventory records
//! for the signed-in session (newest-created first) and keeps it consistent
//! with server-acknowledged results: created records are prepended from the
//! server's canonical response, updates replace the matching entry in place,
//! and deletions are never optimistic — an entry disappears only after the
//! backend acknowledges.
//!
//! All operations assume an authenticated session; callers gate on the session
//! controller's state. Overlapping mutations against the same identity are not
//! serialized — the last response to arrive wins — and in-flight responses are
//! not cancelled when a view goes away. Both races are accepted, matching the
//! request/response model the rest of the client uses.

use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::models::{InventoryItem, ItemDraft};
use crate::products::ProductsApi;

/// On-demand aggregates over the current collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryTotals {
    /// Number of distinct records.
    pub items: usize,
    /// Total stock across all records.
    pub units: u64,
    /// Total monetary value, Σ quantity × price.
    pub value: f64,
}

/// Session-scoped list cache over a [`ProductsApi`] backend.
pub struct Inventory<P: ProductsApi> {
    api: P,
    items: RwLock<Vec<InventoryItem>>,
}

impl<P: ProductsApi> Inventory<P> {
    pub fn new(api: P) -> Self {
        Self {
            api,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the current collection.
    pub async fn items(&self) -> Vec<InventoryItem> {
        self.items.read().await.clone()
    }

    /// Fetch the full collection from the backend, replacing the local
    /// collection wholesale. Callers trigger this once on mount; concurrent
    /// loads are not deduplicated.
    pub async fn load(&self) -> Result<Vec<InventoryItem>, ApiError> {
        let fetched = self.api.list().await?;
        let mut items = self.items.write().await;
        *items = fetched;
        Ok(items.clone())
    }

    /// Create a record and prepend the server's canonical version. The local
    /// collection is unchanged on failure.
    pub async fn create(&self, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
        draft.validate()?;
        let created = self.api.create(draft).await?;
        self.items.write().await.insert(0, created.clone());
        Ok(created)
    }

    /// Update a record, replacing the local entry with the same identity by
    /// the server's canonical version. Position is preserved and no other
    /// entry is touched; the local collection is unchanged on failure.
    pub async fn update(&self, id: &str, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
        draft.validate()?;
        let updated = self.api.update(id, draft).await?;
        let mut items = self.items.write().await;
        if let Some(entry) = items.iter_mut().find(|item| item.id == id) {
            *entry = updated.clone();
        }
        Ok(updated)
    }

    /// Delete a record, removing the local entry only after the backend
    /// acknowledges. A failed deletion leaves the item visible.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(id).await?;
        self.items.write().await.retain(|item| item.id != id);
        Ok(())
    }

    /// Tear down the collection. Called on sign-out; the cache has no meaning
    /// without a session.
    pub async fn clear(&self) {
        self.items.write().await.clear();
    }

    /// Derived read-only view: records whose name, category, or SKU contains
    /// `query` (case-insensitive). Recomputed on every call.
    pub async fn filtered(&self, query: &str) -> Vec<InventoryItem> {
        let items = self.items.read().await;
        let query = query.trim();
        if query.is_empty() {
            return items.clone();
        }
        items
            .iter()
            .filter(|item| item.matches(query))
            .cloned()
            .collect()
    }

    /// Aggregates computed fresh from the current collection.
    pub async fn totals(&self) -> InventoryTotals {
        let items = self.items.read().await;
        InventoryTotals {
            items: items.len(),
            units: items.iter().map(|item| u64::from(item.quantity)).sum(),
            value: items
                .iter()
                .map(|item| f64::from(item.quantity) * item.price)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    /// Fake backend holding its own canonical collection, newest first.
    #[derive(Default)]
    struct FakeProducts {
        items: Mutex<Vec<InventoryItem>>,
        next_id: AtomicU32,
        fail_delete: bool,
    }

    impl FakeProducts {
        fn materialize(&self, id: String, draft: &ItemDraft) -> InventoryItem {
            InventoryItem {
                id,
                name: draft.name.clone(),
                description: draft.description.clone(),
                category: draft.category.clone(),
                sku: draft.sku.clone(),
                quantity: draft.quantity,
                price: draft.price,
                created_by: None,
                created_at: Some("2024-01-01T00:00:00Z".into()),
                updated_at: None,
            }
        }
    }

    impl ProductsApi for &FakeProducts {
        async fn list(&self) -> Result<Vec<InventoryItem>, ApiError> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn create(&self, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
            let id = format!("p{}", self.next_id.fetch_add(1, Ordering::Relaxed));
            let item = self.materialize(id, draft);
            self.items.lock().unwrap().insert(0, item.clone());
            Ok(item)
        }

        async fn update(&self, id: &str, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
            let mut items = self.items.lock().unwrap();
            let entry = items
                .iter_mut()
                .find(|item| item.id == id)
                .ok_or(ApiError::NotFound)?;
            let mut updated = self.materialize(id.to_string(), draft);
            updated.created_at = entry.created_at.clone();
            updated.updated_at = Some("2024-01-02T00:00:00Z".into());
            *entry = updated.clone();
            Ok(updated)
        }

        async fn delete(&self, id: &str) -> Result<(), ApiError> {
            if self.fail_delete {
                return Err(ApiError::Api {
                    status: 500,
                    message: "delete failed".into(),
                });
            }
            let mut items = self.items.lock().unwrap();
            if items.iter().any(|item| item.id == id) {
                items.retain(|item| item.id != id);
                Ok(())
            } else {
                Err(ApiError::NotFound)
            }
        }
    }

    fn draft(name: &str, sku: &str, quantity: u32, price: f64) -> ItemDraft {
        ItemDraft {
            name: name.into(),
            sku: sku.into(),
            quantity,
            price,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_load_converges() {
        let backend = FakeProducts::default();
        let inventory = Inventory::new(&backend);

        let created = inventory
            .create(&draft("Widget A", "W-1", 4, 9.99))
            .await
            .unwrap();
        assert_eq!(inventory.items().await.len(), 1);

        let loaded = inventory.load().await.unwrap();
        let matching: Vec<_> = loaded.iter().filter(|i| i.id == created.id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].name, "Widget A");
    }

    #[tokio::test]
    async fn test_create_prepends_canonical_record() {
        let backend = FakeProducts::default();
        let inventory = Inventory::new(&backend);

        inventory.create(&draft("First", "F-1", 1, 1.0)).await.unwrap();
        inventory.create(&draft("Second", "S-2", 1, 1.0)).await.unwrap();

        let items = inventory.items().await;
        assert_eq!(items[0].name, "Second");
        assert_eq!(items[1].name, "First");
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_the_backend() {
        let backend = FakeProducts::default();
        let inventory = Inventory::new(&backend);

        let err = inventory.create(&draft("", "X", 1, 1.0)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(inventory.items().await.is_empty());
        assert!(backend.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_preserves_position_and_neighbors() {
        let backend = FakeProducts::default();
        let inventory = Inventory::new(&backend);

        inventory.create(&draft("A", "A-1", 1, 1.0)).await.unwrap();
        let b = inventory.create(&draft("B", "B-1", 1, 1.0)).await.unwrap();
        inventory.create(&draft("C", "C-1", 1, 1.0)).await.unwrap();

        let before = inventory.items().await;
        inventory
            .update(&b.id, &draft("B renamed", "B-1", 7, 2.5))
            .await
            .unwrap();
        let after = inventory.items().await;

        // Same identities in the same order
        let ids = |items: &[InventoryItem]| items.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&before), ids(&after));

        // Only the matching entry changed
        assert_eq!(after[1].name, "B renamed");
        assert_eq!(after[1].quantity, 7);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_collection_unchanged() {
        let backend = FakeProducts {
            fail_delete: true,
            ..Default::default()
        };
        let inventory = Inventory::new(&backend);

        let item = inventory.create(&draft("A", "A-1", 1, 1.0)).await.unwrap();
        let before = inventory.items().await;

        let err = inventory.delete(&item.id).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, .. }));
        assert_eq!(inventory.items().await, before);
    }

    #[tokio::test]
    async fn test_delete_removes_only_after_acknowledgment() {
        let backend = FakeProducts::default();
        let inventory = Inventory::new(&backend);

        let a = inventory.create(&draft("A", "A-1", 1, 1.0)).await.unwrap();
        inventory.create(&draft("B", "B-1", 1, 1.0)).await.unwrap();

        inventory.delete(&a.id).await.unwrap();
        let items = inventory.items().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "B");
    }

    #[tokio::test]
    async fn test_totals_recomputed_from_collection() {
        let backend = FakeProducts::default();
        let inventory = Inventory::new(&backend);

        inventory.create(&draft("A", "A-1", 2, 10.50)).await.unwrap();
        inventory.create(&draft("B", "B-1", 1, 5.0)).await.unwrap();

        let totals = inventory.totals().await;
        assert_eq!(totals.items, 2);
        assert_eq!(totals.units, 3);
        assert!((totals.value - 26.00).abs() < 1e-9);
        assert_eq!(format!("{:.2}", totals.value), "26.00");
    }

    #[tokio::test]
    async fn test_filter_matches_name_or_sku_case_insensitively() {
        let backend = FakeProducts::default();
        let inventory = Inventory::new(&backend);

        inventory
            .create(&draft("Widget A", "W-1", 1, 1.0))
            .await
            .unwrap();
        inventory.create(&draft("Gadget", "G-9", 1, 1.0)).await.unwrap();

        let matched = inventory.filtered("w").await;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Widget A");

        // Empty query returns everything, collection untouched
        assert_eq!(inventory.filtered("  ").await.len(), 2);
        assert_eq!(inventory.items().await.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_tears_down_the_collection() {
        let backend = FakeProducts::default();
        let inventory = Inventory::new(&backend);

        inventory.create(&draft("A", "A-1", 1, 1.0)).await.unwrap();
        inventory.clear().await;
        assert!(inventory.items().await.is_empty());
    }
}
