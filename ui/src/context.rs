//! Shared application context constructor for all platforms.
//!
//! Wires a [`store::TokenStore`] backed by the appropriate storage areas:
//! - **Web** (WASM + `web` feature): localStorage / sessionStorage via [`store::WebArea`]
//! - **Native** (tests, previews): process-lifetime [`store::MemoryArea`]

use std::rc::Rc;
use std::sync::Arc;

use api::{ApiClient, AppInventory, AppSession};
use dioxus::prelude::*;
use store::{ClientConfig, TokenStore};

/// Long-lived application services shared by every view.
///
/// Provided once by [`crate::AuthProvider`]; views grab it with [`use_app`].
pub struct AppContext {
    pub client: ApiClient,
    pub session: Arc<AppSession>,
    pub inventory: Arc<AppInventory>,
}

/// Get the shared application context.
pub fn use_app() -> Rc<AppContext> {
    use_context::<Rc<AppContext>>()
}

/// Get the session controller.
pub fn use_session() -> Arc<AppSession> {
    use_app().session.clone()
}

/// Get the inventory cache.
pub fn use_inventory() -> Arc<AppInventory> {
    use_app().inventory.clone()
}

/// Create a platform-appropriate token store.
pub fn make_token_store() -> TokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        TokenStore::new(
            Arc::new(store::WebArea::local()),
            Arc::new(store::WebArea::session()),
        )
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        TokenStore::new(
            Arc::new(store::MemoryArea::new()),
            Arc::new(store::MemoryArea::new()),
        )
    }
}

pub(crate) fn make_app_context() -> AppContext {
    let config = ClientConfig::default();
    let client = ApiClient::new(&config.backend.base_url, make_token_store());
    let session = Arc::new(AppSession::new(client.clone(), client.tokens().clone()));
    let inventory = Arc::new(AppInventory::new(client.clone()));
    AppContext {
        client,
        session,
        inventory,
    }
}
