//! # Error Handling
//!
//! Provides the `AppError` enum for operational failures (loading and parsing).
//! Rule violations found in a document are not errors; see `ValidationIssue`.

use derive_more::{Display, From};

/// Operational failures raised before any check runs.
///
/// `Parse` stays apart from `General` so a malformed document can be told apart from
/// a failure writing the report. Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The document text could not be parsed into a mapping.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
