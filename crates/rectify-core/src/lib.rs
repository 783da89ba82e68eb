//! # rectify-core
//!
//! Foundation crate for the rectify rule catalog.
//! Defines the record model, errors, config, and the document-source trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CatalogConfig;
pub use errors::{CatalogError, CatalogResult, FetchError, LoadError};
pub use traits::DocumentSource;
pub use types::rule::{Rule, RuleCandidate, RuleStatus};
pub use types::rule_set::RuleSet;
pub use types::snapshot::{CacheStatus, CatalogSnapshot};
