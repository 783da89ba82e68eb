//! Query engine: category filtering and three-tier relevance search.
//! Pure functions over borrowed rule collections; nothing here mutates
//! or loads.

use serde::{Deserialize, Serialize};

use rectify_core::{Rule, RuleSet};

/// Which field a search hit matched on. Ordering is the relevance
/// ordering: name beats description beats tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Name,
    Description,
    Tag,
}

/// A search hit: the rule plus the level it matched at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleMatch {
    pub rule: Rule,
    pub matched_on: MatchLevel,
}

/// Normalize a category label for comparison: lowercase, with every run
/// of non-alphanumeric characters collapsed to a single hyphen. "PHP
/// 8.0", "php_8_0", and "php-8-0" all normalize identically.
pub fn normalize_category(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_hyphen = false;
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// Keep rules whose normalized `rule_set` equals the normalized query
/// exactly. No partial matching; input order preserved.
pub fn filter_by_category(rules: &[Rule], category: &str) -> Vec<Rule> {
    let wanted = normalize_category(category);
    rules
        .iter()
        .filter(|r| normalize_category(&r.rule_set) == wanted)
        .cloned()
        .collect()
}

/// Summarize a filtered result as a rule set. `None` when nothing
/// matched; there is no rule-set metadata to report. `rule_count` is
/// the size of the caller's filtered slice, not a global derivation.
pub fn summarize_category(filtered: &[Rule]) -> Option<RuleSet> {
    let first = filtered.first()?;
    Some(RuleSet::new(&first.rule_set, filtered.len()))
}

/// Tokenize a search query: lowercase, non-alphanumeric characters
/// become spaces, tokens shorter than 2 characters are dropped. Length
/// is counted in characters, not bytes.
fn query_tokens(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// Every token must appear as a substring of the (lowercased) haystack.
fn all_tokens_match(haystack: &str, tokens: &[String]) -> bool {
    tokens.iter().all(|t| haystack.contains(t.as_str()))
}

/// Search rules by keyword with three-tier relevance. Each candidate is
/// evaluated name, then description, then joined tag text, stopping at
/// the first level where every query token matches as a substring. A
/// query with no usable tokens yields no matches. Results are ordered by
/// match level; rules at the same level keep their input order (the
/// sort is stable, which callers rely on for deterministic responses).
pub fn search_rules(rules: &[Rule], query: &str, category: Option<&str>) -> Vec<RuleMatch> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let scoped: Vec<Rule> = match category {
        Some(cat) => filter_by_category(rules, cat),
        None => rules.to_vec(),
    };

    let mut matches: Vec<RuleMatch> = scoped
        .into_iter()
        .filter_map(|rule| {
            let matched_on = match_level(&rule, &tokens)?;
            Some(RuleMatch { rule, matched_on })
        })
        .collect();
    matches.sort_by_key(|m| m.matched_on);
    matches
}

fn match_level(rule: &Rule, tokens: &[String]) -> Option<MatchLevel> {
    if all_tokens_match(&rule.name.to_lowercase(), tokens) {
        return Some(MatchLevel::Name);
    }
    if all_tokens_match(&rule.description.to_lowercase(), tokens) {
        return Some(MatchLevel::Description);
    }
    // Tags are already lowercase by derivation.
    if all_tokens_match(&rule.tags.join(" "), tokens) {
        return Some(MatchLevel::Tag);
    }
    None
}
