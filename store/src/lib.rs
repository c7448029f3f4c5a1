pub mod config;
pub mod token;

mod memory;
pub use memory::MemoryArea;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebArea;

pub use config::ClientConfig;
pub use token::{StorageArea, TokenStore, TOKEN_KEY};
