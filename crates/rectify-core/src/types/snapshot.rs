//! Catalog snapshot: the complete state one successful load produces.
//! Replaced wholesale behind an `Arc`, never mutated field by field, so
//! readers always observe a consistent snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rule::Rule;
use super::rule_set::RuleSet;

/// Everything a successful fetch+parse+derive run yields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Parse order: categories in document order, rules within a
    /// category in document order.
    pub rules: Vec<Rule>,
    /// Sorted by `display_name` ascending.
    pub rule_sets: Vec<RuleSet>,
    pub fetched_at: DateTime<Utc>,
}

/// Internal cache lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheStatus {
    #[default]
    Empty,
    Loading,
    Loaded,
    Error,
}

impl CacheStatus {
    /// The collapsed label surfaced to callers: `Loaded` is "fresh",
    /// `Error` is "error", anything else is "stale".
    pub fn client_label(self) -> &'static str {
        match self {
            CacheStatus::Loaded => "fresh",
            CacheStatus::Error => "error",
            CacheStatus::Empty | CacheStatus::Loading => "stale",
        }
    }
}
