//! # Browser storage areas — `localStorage` and `sessionStorage`
//!
//! [`WebArea`] is the [`StorageArea`] implementation used on the **web
//! platform**. The durable area maps to `window.localStorage` (cleared only by
//! explicit action) and the ephemeral area to `window.sessionStorage` (cleared
//! when the browsing session ends), matching the remember-me persistence policy
//! in [`crate::TokenStore`].
//!
//! ## Error handling
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A browser profile where the Storage API is
//! unavailable cannot keep a session alive at all, so degrading to "no stored
//! token" is the only sensible behavior here.

use crate::token::StorageArea;

/// Which browser storage backs a [`WebArea`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Backing {
    Local,
    Session,
}

/// Browser-backed StorageArea for the web platform.
#[derive(Clone, Debug)]
pub struct WebArea {
    backing: Backing,
}

impl WebArea {
    /// Durable area over `window.localStorage`.
    pub fn local() -> Self {
        Self {
            backing: Backing::Local,
        }
    }

    /// Session-scoped area over `window.sessionStorage`.
    pub fn session() -> Self {
        Self {
            backing: Backing::Session,
        }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.backing {
            Backing::Local => window.local_storage().ok().flatten(),
            Backing::Session => window.session_storage().ok().flatten(),
        }
    }
}

impl StorageArea for WebArea {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
