//! # Token store — the single persisted piece of client state
//!
//! A signed-in session is represented client-side by exactly one opaque bearer
//! token string, kept under the fixed key [`TOKEN_KEY`] in one of two key-value
//! areas: a **durable** area that survives application restarts ("remember me")
//! and an **ephemeral** area scoped to the current browsing session. All reads
//! and writes go through the [`StorageArea`] trait, so the same policy works
//! against browser storage ([`crate::WebArea`]) or an in-memory map
//! ([`crate::MemoryArea`]) in tests and native builds.
//!
//! The policy itself lives in [`TokenStore`]:
//!
//! | Method | Behavior |
//! |--------|----------|
//! | [`read`](TokenStore::read) | Durable value if present, else ephemeral, else `None`. No side effects. |
//! | [`write`](TokenStore::write) | Writes one area and clears the other, so exactly one area holds the token afterward. |
//! | [`clear`](TokenStore::clear) | Clears both areas unconditionally. Idempotent. |
//!
//! If both areas somehow hold a value (crossed writes), the durable area takes
//! precedence on read.

use std::sync::Arc;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Object-safe key-value surface over a persistence area.
///
/// Storage is assumed always available; implementations swallow backend errors
/// rather than surfacing them (an environment without working storage is a
/// fatal startup condition, not something to recover from here).
pub trait StorageArea {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Two-area token store with a durable/ephemeral persistence policy.
#[derive(Clone)]
pub struct TokenStore {
    durable: Arc<dyn StorageArea>,
    ephemeral: Arc<dyn StorageArea>,
}

impl TokenStore {
    pub fn new(durable: Arc<dyn StorageArea>, ephemeral: Arc<dyn StorageArea>) -> Self {
        Self { durable, ephemeral }
    }

    /// Current token, if any. Durable wins when both areas hold a value.
    pub fn read(&self) -> Option<String> {
        self.durable
            .get(TOKEN_KEY)
            .or_else(|| self.ephemeral.get(TOKEN_KEY))
    }

    /// Store the token in the area selected by `remember`, clearing the other
    /// area so at most one holds a value.
    pub fn write(&self, token: &str, remember: bool) {
        if remember {
            self.durable.set(TOKEN_KEY, token);
            self.ephemeral.remove(TOKEN_KEY);
        } else {
            self.ephemeral.set(TOKEN_KEY, token);
            self.durable.remove(TOKEN_KEY);
        }
    }

    /// Remove the token from both areas.
    pub fn clear(&self) {
        self.durable.remove(TOKEN_KEY);
        self.ephemeral.remove(TOKEN_KEY);
    }

    /// Direct handle to the durable area, for assertions in tests.
    pub fn durable(&self) -> &dyn StorageArea {
        self.durable.as_ref()
    }

    /// Direct handle to the ephemeral area, for assertions in tests.
    pub fn ephemeral(&self) -> &dyn StorageArea {
        self.ephemeral.as_ref()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("present", &self.read().is_some())
            .finish()
    }
}
