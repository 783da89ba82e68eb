//! Rule record: the unit of the catalog, plus the id/tag derivation
//! shared by the parser and the query engine.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a rule. The overview document carries no
/// deprecation signal today, so the parser always assigns `Stable`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    #[default]
    Stable,
    Deprecated,
    Experimental,
}

/// One refactoring rule. Immutable once constructed: the parser is the
/// only producer, and it only materializes fully validated records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Kebab-cased form of `name`. Unique within a snapshot only as far
    /// as names are unique; identical names collide and that is accepted.
    pub id: String,
    /// Declared identifier, e.g. `RemoveUnusedVariableRule`.
    pub name: String,
    /// First qualifying line of the rule's section.
    pub description: String,
    /// Category label the rule was declared under.
    pub rule_set: String,
    /// Fully qualified class reference from the `- class:` line, if any.
    pub class_path: Option<String>,
    pub status: RuleStatus,
    /// True when the section carries the requires-configuration marker.
    pub configurable: bool,
    /// Lowercase keywords derived from name + description. Search-only;
    /// never used for display grouping.
    pub tags: Vec<String>,
}

/// Raw fields scraped for one rule section, before validation.
#[derive(Debug, Clone, Default)]
pub struct RuleCandidate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub class_path: Option<String>,
    pub configurable: bool,
}

impl Rule {
    /// Validate a scraped candidate. Returns `None` when `name`,
    /// `description`, or `category` is empty after trimming; the
    /// candidate is excluded, never a partially populated record.
    pub fn from_candidate(candidate: RuleCandidate) -> Option<Rule> {
        let name = candidate.name.trim();
        let description = candidate.description.trim();
        let category = candidate.category.trim();
        if name.is_empty() || description.is_empty() || category.is_empty() {
            return None;
        }

        Some(Rule {
            id: rule_id(name),
            tags: derive_tags(name, description),
            name: name.to_string(),
            description: description.to_string(),
            rule_set: category.to_string(),
            class_path: candidate.class_path,
            status: RuleStatus::Stable,
            configurable: candidate.configurable,
        })
    }
}

/// Kebab-case a rule name: insert `-` between a lowercase character and
/// the uppercase character that follows it, then lowercase everything.
/// `RemoveUnusedVariableRule` becomes `remove-unused-variable-rule`.
pub fn rule_id(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_uppercase() && prev_lower {
            out.push('-');
        }
        prev_lower = ch.is_lowercase();
        out.extend(ch.to_lowercase());
    }
    out
}

/// Description words dropped from tag derivation: too common across the
/// catalog to discriminate anything.
const TAG_STOPWORDS: &[&str] = &[
    "the", "and", "with", "from", "that", "this", "into", "will", "when",
    "your", "rule", "rules", "rector", "change", "changes", "class",
    "method", "instead", "code",
];

/// How many description words survive into the tag set at most.
const TAG_DESCRIPTION_CAP: usize = 10;

/// Derive the search tags for a rule: camel-boundary words of `name`
/// (length > 2), unioned with the first qualifying words of
/// `description` (stopword-filtered, length > 3, capped). Deduplicated,
/// first-seen order. Lengths are counted in characters, not bytes.
pub fn derive_tags(name: &str, description: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for word in split_camel_words(name) {
        if word.chars().count() > 2 && !tags.contains(&word) {
            tags.push(word);
        }
    }

    let mut taken = 0;
    for word in description
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        if taken >= TAG_DESCRIPTION_CAP {
            break;
        }
        if word.chars().count() <= 3 || TAG_STOPWORDS.contains(&word) {
            continue;
        }
        taken += 1;
        if !tags.iter().any(|t| t.as_str() == word) {
            tags.push(word.to_string());
        }
    }

    tags
}

/// Split an identifier at lower-to-upper boundaries into lowercase words.
pub(crate) fn split_camel_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase();
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
