#![deny(missing_docs)]

//! # oas-check core
//!
//! Basic structural validation of OpenAPI description documents.
//!
//! Three independent passes run over one immutable [`Document`]:
//! - required top-level sections ([`check_required`]),
//! - path keys and their operations ([`check_paths`]),
//! - component-local `$ref` targets ([`check_refs`]).
//!
//! [`validate`] concatenates their findings in that order.

/// Shared error types.
pub mod error;

/// OpenAPI document loading and checks.
pub mod oas;

pub use error::{AppError, AppResult};
pub use oas::{
    check_paths, check_refs, check_required, validate, Document, ValidationIssue,
    DEFAULT_DOCUMENT_PATH, KNOWN_OPERATIONS,
};
