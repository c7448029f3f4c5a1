//! # Client configuration — `stockpile.toml`
//!
//! Defines the TOML configuration consumed at startup to locate the backend.
//!
//! ```toml
//! [backend]
//! base_url = "https://inventory-gu41.onrender.com"
//! ```
//!
//! All structs derive `Default` with production defaults, so a missing or empty
//! config file is equivalent to the default configuration. The backend origin
//! can also be pinned at compile time through the `STOCKPILE_API_URL`
//! environment variable.

use serde::{Deserialize, Serialize};

/// Hosted backend origin used when nothing else is configured.
const DEFAULT_BASE_URL: &str = "https://inventory-gu41.onrender.com";

/// Top-level configuration stored in `stockpile.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Origin of the inventory REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    option_env!("STOCKPILE_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend origin.
    pub fn new(base_url: String) -> Self {
        Self {
            backend: BackendConfig { base_url },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "stockpile.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_hosted_backend() {
        let config = ClientConfig::default();
        assert!(!config.backend.base_url.is_empty());
        assert!(!config.backend.base_url.ends_with('/'));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("http://localhost:5000".to_string());
        let text = config.to_toml().unwrap();
        let loaded = ClientConfig::from_toml(&text).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.backend.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let loaded = ClientConfig::from_toml("").unwrap();
        assert_eq!(loaded, ClientConfig::default());
    }
}
