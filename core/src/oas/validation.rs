#![deny(missing_docs)]

//! # Structural Validation
//!
//! Checks that need no cross-referencing:
//! - The required top-level sections exist.
//! - Every path key starts with `/`.
//! - Every path item only uses known operation keys.

use crate::oas::document::{key_text, Document};
use crate::oas::issue::ValidationIssue;
use serde_yaml::Value;
use std::collections::BTreeSet;

const REQUIRED_TOP_LEVEL: [&str; 3] = ["openapi", "info", "paths"];

/// Keys allowed inside a path item: the HTTP operations plus shared `parameters`.
pub const KNOWN_OPERATIONS: [&str; 9] = [
    "get",
    "post",
    "put",
    "patch",
    "delete",
    "options",
    "head",
    "trace",
    "parameters",
];

/// Reports missing top-level sections.
///
/// `openapi`, `info` and `paths` are checked in that order, then `components`.
/// `components.schemas` is only inspected when `components` itself exists.
pub fn check_required(document: &Document) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = REQUIRED_TOP_LEVEL
        .iter()
        .filter(|key| !document.contains_key(key))
        .map(|key| ValidationIssue::MissingTopLevel(key.to_string()))
        .collect();

    match document.get("components") {
        None => issues.push(ValidationIssue::MissingComponents),
        Some(components) => {
            let has_schemas = components
                .as_mapping()
                .is_some_and(|m| m.contains_key("schemas"));
            if !has_schemas {
                issues.push(ValidationIssue::MissingSchemas);
            }
        }
    }

    tracing::debug!(count = issues.len(), "required-key check done");
    issues
}

/// Reports malformed path keys and unknown operations, in document order.
///
/// An absent (or non-mapping) `paths` section yields nothing here; its absence
/// is reported by [`check_required`].
pub fn check_paths(document: &Document) -> Vec<ValidationIssue> {
    let Some(paths) = document.get("paths").and_then(Value::as_mapping) else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    for (key, item) in paths {
        let path = key_text(key);
        if !path.starts_with('/') {
            issues.push(ValidationIssue::PathWithoutLeadingSlash(path.clone()));
        }

        let unknown: BTreeSet<String> = item
            .as_mapping()
            .into_iter()
            .flat_map(|m| m.keys())
            .map(key_text)
            .filter(|op| !KNOWN_OPERATIONS.contains(&op.as_str()))
            .collect();

        if !unknown.is_empty() {
            issues.push(ValidationIssue::UnknownOperations {
                path,
                operations: unknown.into_iter().collect(),
            });
        }
    }

    tracing::debug!(count = issues.len(), "path check done");
    issues
}
