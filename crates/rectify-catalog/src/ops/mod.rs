//! Inbound operations: the plain functions and response records the
//! protocol layer serializes. Blank-input validation happens here, not
//! in the query engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rectify_core::{CatalogError, CatalogResult, Rule, RuleSet};

use crate::cache::CatalogCache;
use crate::query::{self, RuleMatch};

/// Response for the list operation: the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub rules: Vec<Rule>,
    pub rule_sets: Vec<RuleSet>,
    pub total_count: usize,
    pub cache_status: String,
    pub fetched_at: DateTime<Utc>,
}

/// Response for the category filter operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterResponse {
    pub rules: Vec<Rule>,
    pub match_count: usize,
    pub rule_set: Option<RuleSet>,
    pub cache_status: String,
}

/// Response for the keyword search operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub matches: Vec<RuleMatch>,
    pub match_count: usize,
    pub query: String,
    pub category_filter: Option<String>,
    pub cache_status: String,
}

/// List all rules with their derived rule sets.
pub fn list(cache: &CatalogCache) -> CatalogResult<ListResponse> {
    let (snapshot, status) = cache.snapshot_with_status()?;
    Ok(ListResponse {
        total_count: snapshot.rules.len(),
        rules: snapshot.rules.clone(),
        rule_sets: snapshot.rule_sets.clone(),
        cache_status: status.client_label().to_string(),
        fetched_at: snapshot.fetched_at,
    })
}

/// Filter rules by category. The category is required and must be
/// non-blank.
pub fn filter(cache: &CatalogCache, category: &str) -> CatalogResult<FilterResponse> {
    if category.trim().is_empty() {
        return Err(CatalogError::EmptyQuery { param: "category" });
    }
    let (snapshot, status) = cache.snapshot_with_status()?;
    let rules = query::filter_by_category(&snapshot.rules, category);
    let rule_set = query::summarize_category(&rules);
    Ok(FilterResponse {
        match_count: rules.len(),
        rules,
        rule_set,
        cache_status: status.client_label().to_string(),
    })
}

/// Search rules by keyword, optionally scoped to one category. The
/// query is required and must be non-blank; an empty result is a valid
/// response, not an error.
pub fn search(
    cache: &CatalogCache,
    query_text: &str,
    category: Option<&str>,
) -> CatalogResult<SearchResponse> {
    if query_text.trim().is_empty() {
        return Err(CatalogError::EmptyQuery { param: "query" });
    }
    let (snapshot, status) = cache.snapshot_with_status()?;
    let matches = query::search_rules(&snapshot.rules, query_text, category);
    Ok(SearchResponse {
        match_count: matches.len(),
        matches,
        query: query_text.to_string(),
        category_filter: category.map(str::to_string),
        cache_status: status.client_label().to_string(),
    })
}
