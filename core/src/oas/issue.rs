#![deny(missing_docs)]

//! # Validation Issues
//!
//! One variant per rule. The `Display` text is the message printed in reports.

use derive_more::Display;

/// A single violated rule found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationIssue {
    /// A required top-level key (`openapi`, `info`, `paths`) is absent.
    #[display("Missing top-level '{_0}'")]
    MissingTopLevel(String),

    /// The `components` section is absent.
    #[display("Missing 'components'")]
    MissingComponents,

    /// `components` exists but declares no `schemas`.
    #[display("Missing 'components.schemas'")]
    MissingSchemas,

    /// A path key does not start with `/`.
    #[display("Path must start with '/': {_0}")]
    PathWithoutLeadingSlash(String),

    /// A path item declares keys outside the known operation set.
    #[display("Unknown operations in {path}: {}", operations.join(", "))]
    UnknownOperations {
        /// The offending path key.
        path: String,
        /// Unknown keys, sorted ascending.
        operations: Vec<String>,
    },

    /// A `#/components/...` reference does not resolve.
    #[display("Broken $ref {_0}")]
    BrokenRef(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationIssue::MissingTopLevel("info".into()).to_string(),
            "Missing top-level 'info'"
        );
        assert_eq!(
            ValidationIssue::MissingComponents.to_string(),
            "Missing 'components'"
        );
        assert_eq!(
            ValidationIssue::MissingSchemas.to_string(),
            "Missing 'components.schemas'"
        );
        assert_eq!(
            ValidationIssue::PathWithoutLeadingSlash("users".into()).to_string(),
            "Path must start with '/': users"
        );
        assert_eq!(
            ValidationIssue::BrokenRef("#/components/schemas/X".into()).to_string(),
            "Broken $ref #/components/schemas/X"
        );
    }

    #[test]
    fn test_unknown_operations_joined() {
        let issue = ValidationIssue::UnknownOperations {
            path: "/pets".into(),
            operations: vec!["fetch".into(), "summary".into()],
        };
        assert_eq!(issue.to_string(), "Unknown operations in /pets: fetch, summary");
    }
}
