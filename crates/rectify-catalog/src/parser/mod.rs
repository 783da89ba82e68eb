//! Rules-overview document parser.
//!
//! Turns the semi-structured markdown overview into validated [`Rule`]
//! records. Never fails on malformed input: unparseable or incomplete
//! sections are logged and skipped rather than failing the whole load.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use rectify_core::{Rule, RuleCandidate};

/// Marker the document places on rules that require configuration.
const CONFIGURABLE_MARKER: &str = ":wrench:";

/// Prefix of the line carrying the rule's class reference.
const CLASS_LINE_PREFIX: &str = "- class:";

/// Index section of the document; not a rule category.
const INDEX_SECTION_TITLE: &str = "Categories";

/// Parse the overview document into rules. Categories appear in document
/// order, rules within a category in document order. Empty input yields
/// an empty vec.
pub fn parse_rules(document: &str) -> Vec<Rule> {
    let mut rules = Vec::new();

    // Level-2 headings delimit categories. The first chunk is the
    // document title and preamble.
    for section in document.split("\n## ").skip(1) {
        let mut chunks = section.split("\n### ");
        let head = chunks.next().unwrap_or_default();
        let category = head.lines().next().unwrap_or_default().trim();
        if category == INDEX_SECTION_TITLE {
            continue;
        }

        for chunk in chunks {
            let candidate = scan_rule_chunk(chunk, category);
            match Rule::from_candidate(candidate) {
                Some(rule) => rules.push(rule),
                None => {
                    let name = chunk.lines().next().unwrap_or_default().trim();
                    debug!(category, name, "excluding incomplete rule section");
                }
            }
        }
    }

    rules
}

/// Scrape one level-3 rule section into a candidate. The first line is
/// the rule name; the scan stops at a fenced code block or a new
/// level-1/level-2 heading.
fn scan_rule_chunk(chunk: &str, category: &str) -> RuleCandidate {
    let mut lines = chunk.lines();
    let name = lines.next().unwrap_or_default().trim().to_string();

    let mut candidate = RuleCandidate {
        name,
        category: category.to_string(),
        ..RuleCandidate::default()
    };

    for line in lines {
        let trimmed = line.trim();
        if trimmed.starts_with("```") || trimmed.starts_with("# ") || trimmed.starts_with("## ") {
            break;
        }
        if trimmed.contains(CONFIGURABLE_MARKER) {
            candidate.configurable = true;
        }
        if candidate.class_path.is_none() {
            if let Some(rest) = trimmed.strip_prefix(CLASS_LINE_PREFIX) {
                candidate.class_path = extract_code_span(rest);
            }
        }
        if candidate.description.is_empty() && is_description_line(trimmed) {
            candidate.description = trimmed.to_string();
        }
    }

    candidate
}

/// The description is the first non-empty line that is neither a bullet
/// nor an annotation marker.
fn is_description_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('-') && !line.starts_with('*') && !line.starts_with(':')
}

/// Pull the backtick code span out of an inline link: ``[`Fqn\Class`](...)``.
fn extract_code_span(text: &str) -> Option<String> {
    static CODE_SPAN: OnceLock<Regex> = OnceLock::new();
    let re = CODE_SPAN.get_or_init(|| Regex::new(r"\[`([^`]+)`\]").unwrap());
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
