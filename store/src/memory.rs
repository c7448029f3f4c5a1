use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::token::StorageArea;

/// In-memory StorageArea for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryArea {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryArea {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageArea for MemoryArea {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{TokenStore, TOKEN_KEY};

    fn make_store() -> (TokenStore, MemoryArea, MemoryArea) {
        let durable = MemoryArea::new();
        let ephemeral = MemoryArea::new();
        let store = TokenStore::new(Arc::new(durable.clone()), Arc::new(ephemeral.clone()));
        (store, durable, ephemeral)
    }

    #[test]
    fn test_empty_store_reads_none() {
        let (store, _, _) = make_store();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_remembered_write_uses_durable_area() {
        let (store, durable, ephemeral) = make_store();

        store.write("abc123", true);

        assert_eq!(durable.get(TOKEN_KEY).as_deref(), Some("abc123"));
        assert!(ephemeral.get(TOKEN_KEY).is_none());
        assert_eq!(store.read().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_write_uses_ephemeral_area() {
        let (store, durable, ephemeral) = make_store();

        store.write("abc123", false);

        assert!(durable.get(TOKEN_KEY).is_none());
        assert_eq!(ephemeral.get(TOKEN_KEY).as_deref(), Some("abc123"));
        assert_eq!(store.read().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_write_clears_the_other_area() {
        let (store, durable, ephemeral) = make_store();

        // Sign in remembered, then again without remember-me
        store.write("first", true);
        store.write("second", false);

        assert!(durable.get(TOKEN_KEY).is_none());
        assert_eq!(ephemeral.get(TOKEN_KEY).as_deref(), Some("second"));

        // And back again
        store.write("third", true);
        assert_eq!(durable.get(TOKEN_KEY).as_deref(), Some("third"));
        assert!(ephemeral.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_durable_wins_on_crossed_writes() {
        let (store, durable, ephemeral) = make_store();

        durable.set(TOKEN_KEY, "durable-token");
        ephemeral.set(TOKEN_KEY, "ephemeral-token");

        assert_eq!(store.read().as_deref(), Some("durable-token"));
    }

    #[test]
    fn test_clear_empties_both_areas() {
        let (store, durable, ephemeral) = make_store();

        durable.set(TOKEN_KEY, "a");
        ephemeral.set(TOKEN_KEY, "b");

        store.clear();
        assert!(durable.get(TOKEN_KEY).is_none());
        assert!(ephemeral.get(TOKEN_KEY).is_none());
        assert!(store.read().is_none());

        // Idempotent
        store.clear();
        assert!(store.read().is_none());
    }
}
