//! Rule-set derivation: category summaries computed from a rule
//! collection, never authored independently.

use rustc_hash::FxHashMap;

use rectify_core::{Rule, RuleSet};

/// Group rules by exact `rule_set` value and summarize each group.
/// Grouping preserves first-seen order internally; the output is sorted
/// by `display_name` ascending, case-insensitively. Input order is
/// irrelevant to correctness.
pub fn derive_rule_sets(rules: &[Rule]) -> Vec<RuleSet> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for rule in rules {
        match index.get(rule.rule_set.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(rule.rule_set.as_str(), counts.len());
                counts.push((rule.rule_set.as_str(), 1));
            }
        }
    }

    let mut rule_sets: Vec<RuleSet> = counts
        .into_iter()
        .map(|(name, count)| RuleSet::new(name, count))
        .collect();
    rule_sets.sort_by(|a, b| {
        a.display_name
            .to_lowercase()
            .cmp(&b.display_name.to_lowercase())
    });
    rule_sets
}
