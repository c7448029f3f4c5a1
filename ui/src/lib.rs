//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod components;

mod context;
pub use context::{make_token_store, use_app, use_inventory, use_session, AppContext};

mod auth;
pub use auth::{redirect_to, use_auth, AuthProvider};

mod navbar;
pub use navbar::Navbar;

mod item_form;
pub use item_form::{ItemForm, ModalOverlay};

mod item_table;
pub use item_table::ItemTable;

mod stats;
pub use stats::StatsCards;
