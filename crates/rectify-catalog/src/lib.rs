//! # rectify-catalog
//!
//! The document-to-queryable-catalog pipeline: markdown-overview parser,
//! rule-set deriver, relevance-ranked query engine, and the single-flight
//! catalog cache that fronts the document fetch.

pub mod cache;
pub mod ops;
pub mod parser;
pub mod query;
pub mod rule_sets;
pub mod source;

pub use cache::CatalogCache;
pub use parser::parse_rules;
pub use query::{filter_by_category, normalize_category, search_rules, MatchLevel, RuleMatch};
pub use rule_sets::derive_rule_sets;
pub use source::{HttpDocumentSource, StaticDocumentSource};
