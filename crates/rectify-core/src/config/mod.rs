//! Catalog configuration.

use serde::{Deserialize, Serialize};

/// Default source: the published rules-overview document.
pub const DEFAULT_DOCUMENT_URL: &str =
    "https://raw.githubusercontent.com/rectorphp/rector/main/docs/rector_rules_overview.md";

/// Configuration for the document source and cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// URL of the rules-overview document. Default: the published overview.
    pub document_url: Option<String>,
    /// Fetch timeout in seconds. Default: 10.
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with the fetch.
    pub user_agent: Option<String>,
}

impl CatalogConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Returns the effective document URL, defaulting to the published overview.
    pub fn effective_document_url(&self) -> &str {
        self.document_url.as_deref().unwrap_or(DEFAULT_DOCUMENT_URL)
    }

    /// Returns the effective fetch timeout, defaulting to 10 seconds.
    pub fn effective_timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(10)
    }

    /// Returns the effective User-Agent header.
    pub fn effective_user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or("rectify-catalog/0.1")
    }
}
