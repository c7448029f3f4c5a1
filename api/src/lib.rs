//! # API crate — the inventory backend client core
//!
//! This crate is the backbone of the Stockpile client. It defines the typed
//! REST surface of the external inventory backend, the authenticated transport
//! that talks to it, and the two stateful cores the frontends render from: the
//! session controller and the inventory list cache.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — reqwest transport with bearer injection and global 401 interception |
//! | [`error`] | [`ApiError`] taxonomy (unauthorized, forbidden, validation, network, decode) |
//! | [`models`] | Explicit wire schemas per endpoint (`UserInfo`, `InventoryItem`, drafts, envelopes) |
//! | [`auth`] | [`AuthApi`] — login / register / logout / me mapping |
//! | [`products`] | [`ProductsApi`] — list / create / update / delete mapping |
//! | [`session`] | [`Session`] — the authentication state machine and token persistence policy |
//! | [`inventory`] | [`Inventory`] — the session-scoped list cache with derived views |
//!
//! The stateful cores are generic over the [`AuthApi`] / [`ProductsApi`]
//! traits, so tests exercise them against in-memory fakes while the frontends
//! wire them to the real [`ApiClient`] (see [`AppSession`], [`AppInventory`]).

pub mod auth;
pub mod client;
pub mod error;
pub mod inventory;
pub mod models;
pub mod products;
pub mod session;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use error::ApiError;
pub use inventory::{Inventory, InventoryTotals};
pub use models::{
    CreatedBy, Envelope, InventoryItem, ItemDraft, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, UserInfo,
};
pub use products::ProductsApi;
pub use session::{Session, SessionState};

/// Session controller wired to the real REST transport.
pub type AppSession = Session<ApiClient>;

/// Inventory cache wired to the real REST transport.
pub type AppInventory = Inventory<ApiClient>;
