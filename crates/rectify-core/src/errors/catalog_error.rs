use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FetchError;

/// Top-level error type for the catalog.
/// `Clone` because a single failed load fans its error out to every
/// caller attached to that load.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog load failed: {message}")]
    LoadFailed { message: String },

    #[error("parameter '{param}' must not be empty")]
    EmptyQuery { param: &'static str },
}

impl From<FetchError> for CatalogError {
    fn from(err: FetchError) -> Self {
        CatalogError::LoadFailed {
            message: err.to_string(),
        }
    }
}

/// Convenience type alias.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Metadata about the most recent failed load, surfaced by
/// `CatalogCache::last_error`. Recorded even when the failure was
/// absorbed by a stale snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadError {
    pub message: String,
    pub occurred_at: DateTime<Utc>,
    /// Whether a prior snapshot existed to keep serving.
    pub had_fallback: bool,
}
