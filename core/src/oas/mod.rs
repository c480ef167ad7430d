#![deny(missing_docs)]

//! # OpenAPI Validation Module
//!
//! - **document**: Loading a description file into an ordered tree.
//! - **issue**: The rule violations a check can report.
//! - **validation**: Required sections and path shape.
//! - **refs**: Component-local `$ref` integrity.

pub mod document;
pub mod issue;
pub mod refs;
pub mod validation;

pub use document::{Document, DEFAULT_DOCUMENT_PATH};
pub use issue::ValidationIssue;
pub use refs::check_refs;
pub use validation::{check_paths, check_required, KNOWN_OPERATIONS};

/// Runs every check against `document` and returns the findings in report order:
/// required sections, then paths, then references.
pub fn validate(document: &Document) -> Vec<ValidationIssue> {
    let mut issues = check_required(document);
    issues.extend(check_paths(document));
    issues.extend(check_refs(document));
    tracing::debug!(count = issues.len(), "validation finished");
    issues
}
