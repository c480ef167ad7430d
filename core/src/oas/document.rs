#![deny(missing_docs)]

//! # Document Loading
//!
//! Reads an OpenAPI description from disk into an insertion-ordered YAML tree.
//! JSON input is accepted as well, since JSON is a subset of YAML.

use crate::error::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Path used by the CLI when no document is given.
pub const DEFAULT_DOCUMENT_PATH: &str = "openapi.yaml";

/// A parsed API description: the root mapping of the file.
///
/// Checks only ever borrow it; nothing mutates a loaded document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Reads and parses the description at `path`.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), bytes = content.len(), "loaded document");
        Self::parse(&content).map_err(|e| match e {
            AppError::Parse(msg) => AppError::Parse(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parses description text.
    ///
    /// Merge keys (`<<: *anchor`) are folded into their mappings before any check sees them.
    /// Fails when the text is not valid YAML, is empty, or its root is not a mapping.
    /// Duplicate keys in one mapping are rejected rather than letting the last one win.
    pub fn parse(content: &str) -> AppResult<Self> {
        let mut value: Value = serde_yaml::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI YAML: {}", e)))?;
        value
            .apply_merge()
            .map_err(|e| AppError::Parse(format!("Failed to apply YAML merge keys: {}", e)))?;
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Err(AppError::Parse("document is empty".into())),
            other => Err(AppError::Parse(format!(
                "document root must be a mapping, found {}",
                value_kind(&other)
            ))),
        }
    }

    /// Returns the top-level value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Returns true if the document declares the top-level `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// The root mapping.
    pub fn root(&self) -> &Mapping {
        &self.root
    }
}

/// Renders a mapping key the way it appears in messages.
///
/// String keys are used verbatim; other scalars use their plain YAML form (`200`, `true`).
pub(crate) fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
