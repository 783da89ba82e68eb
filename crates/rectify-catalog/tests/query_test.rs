//! Query-engine tests: category normalization, exact filtering,
//! summaries, and three-tier relevance search.

use rectify_catalog::query::summarize_category;
use rectify_catalog::{filter_by_category, normalize_category, search_rules, MatchLevel};
use rectify_core::{Rule, RuleCandidate};

fn rule(name: &str, description: &str, category: &str) -> Rule {
    Rule::from_candidate(RuleCandidate {
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        class_path: None,
        configurable: false,
    })
    .expect("test rule is valid")
}

fn fixture() -> Vec<Rule> {
    vec![
        rule(
            "RemoveUnusedVariableRule",
            "Removes unused variables from method bodies.",
            "Coding Style",
        ),
        rule(
            "UnionTypesRule",
            "Changes docblock types to union types where possible.",
            "PHP 8.0",
        ),
        rule(
            "StrictComparisonRule",
            "Replaces loose equality with strict comparison.",
            "Strictness",
        ),
        rule(
            "NullCoalescingRule",
            "Uses the null coalescing operator for fallback values.",
            "PHP 8.0",
        ),
    ]
}

// ---- normalization ----

#[test]
fn normalization_is_case_and_separator_insensitive() {
    assert_eq!(normalize_category("Code Quality"), "code-quality");
    assert_eq!(normalize_category("code_quality"), "code-quality");
    assert_eq!(normalize_category("code-quality"), "code-quality");
    assert_eq!(normalize_category("PHP 8.0"), "php-8-0");
    assert_eq!(normalize_category("php-8-0"), "php-8-0");
}

#[test]
fn normalization_collapses_runs_and_trims_edges() {
    assert_eq!(normalize_category("  Coding   Style  "), "coding-style");
    assert_eq!(normalize_category("__weird__label__"), "weird-label");
}

// ---- filter ----

#[test]
fn filter_matches_exactly_after_normalization() {
    let rules = fixture();
    let hits = filter_by_category(&rules, "php-8-0");
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|r| r.rule_set == "PHP 8.0"));
}

#[test]
fn filter_rejects_partial_matches() {
    let rules = fixture();
    assert!(filter_by_category(&rules, "php").is_empty());
    assert!(filter_by_category(&rules, "coding").is_empty());
}

#[test]
fn filter_preserves_input_order() {
    let rules = fixture();
    let hits = filter_by_category(&rules, "PHP 8.0");
    assert_eq!(hits[0].name, "UnionTypesRule");
    assert_eq!(hits[1].name, "NullCoalescingRule");
}

#[test]
fn summarize_reports_the_filtered_count() {
    let rules = fixture();
    let hits = filter_by_category(&rules, "php_8_0");
    let summary = summarize_category(&hits).expect("non-empty filter result");
    assert_eq!(summary.name, "PHP 8.0");
    assert_eq!(summary.rule_count, 2);
}

#[test]
fn summarize_yields_nothing_for_empty_results() {
    assert!(summarize_category(&[]).is_none());
}

// ---- search ----

#[test]
fn search_matches_name_level_first() {
    let rules = fixture();
    let hits = search_rules(&rules, "type", None);
    // "type" is a substring of "UnionTypesRule".
    assert_eq!(hits[0].rule.name, "UnionTypesRule");
    assert_eq!(hits[0].matched_on, MatchLevel::Name);
}

#[test]
fn search_requires_every_token_to_match() {
    let rules = fixture();
    let hits = search_rules(&rules, "union types", None);
    assert_eq!(hits.len(), 1);
    // Both tokens are substrings of the name.
    assert_eq!(hits[0].matched_on, MatchLevel::Name);

    assert!(search_rules(&rules, "union nonexistent", None).is_empty());
}

#[test]
fn search_falls_back_to_description_then_tags() {
    let rules = fixture();

    let hits = search_rules(&rules, "loose equality", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].rule.name, "StrictComparisonRule");
    assert_eq!(hits[0].matched_on, MatchLevel::Description);

    // "rule" only appears in the name, "bodies" only in the
    // description; neither single field holds both tokens, but the
    // joined tag text does.
    let hits = search_rules(&rules, "rule bodies", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].rule.name, "RemoveUnusedVariableRule");
    assert_eq!(hits[0].matched_on, MatchLevel::Tag);
}

#[test]
fn search_orders_results_by_match_level() {
    let rules = vec![
        rule("AlphaRule", "mentions widget in prose", "Cat"),
        rule("WidgetRule", "unrelated text entirely", "Cat"),
        rule("BetaRule", "also talks about a widget", "Cat"),
    ];
    let hits = search_rules(&rules, "widget", None);
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].rule.name, "WidgetRule");
    assert_eq!(hits[0].matched_on, MatchLevel::Name);
    // Same-level hits keep their input order.
    assert_eq!(hits[1].rule.name, "AlphaRule");
    assert_eq!(hits[2].rule.name, "BetaRule");
}

#[test]
fn search_is_case_insensitive() {
    let rules = fixture();
    let lower = search_rules(&rules, "union", None);
    let upper = search_rules(&rules, "UNION", None);
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
}

#[test]
fn search_with_no_usable_tokens_is_empty() {
    let rules = fixture();
    assert!(search_rules(&rules, "", None).is_empty());
    assert!(search_rules(&rules, "a", None).is_empty());
    assert!(search_rules(&rules, "!!! ?", None).is_empty());
}

#[test]
fn token_length_is_counted_in_characters_not_bytes() {
    let rules = vec![rule(
        "CaféNormalizerRule",
        "Normalizes accented identifiers.",
        "Coding Style",
    )];
    // "é" is two bytes but a single character: not a usable token.
    assert!(search_rules(&rules, "é", None).is_empty());
    // Two characters is enough.
    let hits = search_rules(&rules, "fé", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_on, MatchLevel::Name);
}

#[test]
fn search_respects_the_category_scope() {
    let rules = fixture();
    let hits = search_rules(&rules, "type", Some("php-8-0"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].rule.name, "UnionTypesRule");

    let hits = search_rules(&rules, "type", Some("coding-style"));
    assert!(hits.is_empty());
}

#[test]
fn search_does_not_mutate_its_input() {
    let rules = fixture();
    let before = rules.clone();
    let _ = search_rules(&rules, "union", None);
    let _ = filter_by_category(&rules, "PHP 8.0");
    assert_eq!(rules, before);
}
