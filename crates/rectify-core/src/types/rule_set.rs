//! RuleSet record: a derived category summary. Never authored directly;
//! only the deriver and the filter summarizer construct these.

use serde::{Deserialize, Serialize};

/// Category summary over the rules sharing one `rule_set` label.
/// `rule_count >= 1` by construction: empty rule sets are never built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Category key, equal to the member rules' `rule_set` value.
    pub name: String,
    /// Human-formatted rendering of `name`.
    pub display_name: String,
    pub description: Option<String>,
    pub rule_count: usize,
}

impl RuleSet {
    pub fn new(name: &str, rule_count: usize) -> RuleSet {
        RuleSet {
            name: name.to_string(),
            display_name: display_name(name),
            description: None,
            rule_count,
        }
    }
}

/// Format a category key for display: split camel boundaries into
/// space-joined words. A leading literal `Php` followed by digits is a
/// PHP version category and renders as `PHP {major}.{minor}`, with the
/// minor defaulting to 0 (`Php80` -> `PHP 8.0`, `Php8` -> `PHP 8.0`).
pub fn display_name(name: &str) -> String {
    if let Some(version) = php_version_label(name) {
        return version;
    }

    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = ch.is_lowercase();
        out.push(ch);
    }
    out
}

fn php_version_label(name: &str) -> Option<String> {
    let digits = name.strip_prefix("Php")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut chars = digits.chars();
    let major = chars.next()?;
    let minor: String = chars.collect();
    if minor.is_empty() {
        Some(format!("PHP {major}.0"))
    } else {
        Some(format!("PHP {major}.{minor}"))
    }
}
