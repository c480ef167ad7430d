#![deny(missing_docs)]

//! # Reference Integrity
//!
//! Walks the whole document for `$ref` values and checks that every
//! component-local reference (`#/components/...`) lands on an existing key.
//!
//! References rooted anywhere else are collected but never checked, so
//! `#/external/Thing` or a malformed pointer is silently accepted.

use crate::oas::document::Document;
use crate::oas::issue::ValidationIssue;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::OnceLock;

const REF_KEY: &str = "$ref";
const COMPONENTS_PREFIX: &str = "#/components/";

fn ref_pattern() -> &'static Regex {
    static REF_RE: OnceLock<Regex> = OnceLock::new();
    REF_RE.get_or_init(|| Regex::new(r"^#/.+").expect("Invalid regex"))
}

/// Reports every `#/components/...` reference that does not resolve, in document order.
///
/// Each occurrence is checked on its own, so a broken reference used twice is reported twice.
pub fn check_refs(document: &Document) -> Vec<ValidationIssue> {
    let mut refs = Vec::new();
    collect_mapping_refs(document.root(), &mut refs);

    let components = document.get("components");
    let issues: Vec<ValidationIssue> = refs
        .into_iter()
        .filter(|r| r.starts_with(COMPONENTS_PREFIX))
        .filter(|r| !resolves(components, r))
        .map(|r| ValidationIssue::BrokenRef(r.to_string()))
        .collect();

    tracing::debug!(count = issues.len(), "reference check done");
    issues
}

/// Collects the string values of `$ref` keys shaped like `#/...`.
fn collect_refs<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::Mapping(map) => collect_mapping_refs(map, out),
        Value::Sequence(items) => {
            for item in items {
                collect_refs(item, out);
            }
        }
        Value::Tagged(tagged) => collect_refs(&tagged.value, out),
        _ => {}
    }
}

fn collect_mapping_refs<'a>(map: &'a Mapping, out: &mut Vec<&'a str>) {
    for (key, child) in map {
        if key.as_str() == Some(REF_KEY) {
            if let Some(target) = child.as_str().filter(|s| ref_pattern().is_match(s)) {
                tracing::trace!(reference = target, "found reference");
                out.push(target);
            }
        }
        collect_refs(child, out);
    }
}

/// Walks `components` segment by segment; a missing key anywhere means unresolved.
fn resolves(components: Option<&Value>, reference: &str) -> bool {
    let Some(mut node) = components else {
        return false;
    };
    for segment in reference.split('/').skip(2) {
        match node.as_mapping().and_then(|m| m.get(segment)) {
            Some(next) => node = next,
            None => return false,
        }
    }
    true
}
