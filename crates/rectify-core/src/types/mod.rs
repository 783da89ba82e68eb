pub mod rule;
pub mod rule_set;
pub mod snapshot;

pub use rule::{Rule, RuleCandidate, RuleStatus};
pub use rule_set::RuleSet;
pub use snapshot::{CacheStatus, CatalogSnapshot};
