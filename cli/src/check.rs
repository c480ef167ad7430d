#![deny(missing_docs)]

//! # Check Command
//!
//! Loads one description file, runs every check, and prints the report.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use oas_check_core::{validate, AppError, AppResult, Document, DEFAULT_DOCUMENT_PATH};
use serde::Serialize;

/// How the report is written to stdout.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `VALIDATION ERRORS:` followed by `- <message>` lines, or the OK line.
    #[default]
    Text,
    /// A single JSON object: `{"valid": bool, "errors": [..]}`.
    Json,
}

/// Arguments for the check.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the OpenAPI description (YAML or JSON).
    #[clap(default_value = DEFAULT_DOCUMENT_PATH)]
    pub path: PathBuf,

    /// Report format.
    #[clap(long, value_enum, env = "OAS_CHECK_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No issues found.
    Passed,
    /// At least one issue was reported.
    Failed,
}

impl Outcome {
    /// Process status for this outcome: 0 when passed, 1 when issues were found.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Passed => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    errors: &'a [String],
}

/// Executes the check and writes the report to `out`.
///
/// Load and parse failures are returned as errors before anything is written.
pub fn execute(args: &CheckArgs, out: &mut impl Write) -> AppResult<Outcome> {
    let document = Document::load(&args.path)?;
    let messages: Vec<String> = validate(&document)
        .iter()
        .map(ToString::to_string)
        .collect();

    tracing::debug!(path = ?args.path, issues = messages.len(), "check complete");

    match args.format {
        OutputFormat::Text => write_text(&messages, out)?,
        OutputFormat::Json => {
            let report = JsonReport {
                valid: messages.is_empty(),
                errors: &messages,
            };
            serde_json::to_writer_pretty(&mut *out, &report)
                .map_err(|e| AppError::General(format!("Failed to write JSON report: {}", e)))?;
            writeln!(out)?;
        }
    }

    Ok(if messages.is_empty() {
        Outcome::Passed
    } else {
        Outcome::Failed
    })
}

fn write_text(messages: &[String], out: &mut impl Write) -> AppResult<()> {
    if messages.is_empty() {
        writeln!(out, "OK: basic validation passed.")?;
        return Ok(());
    }
    writeln!(out, "VALIDATION ERRORS:")?;
    for message in messages {
        writeln!(out, "- {}", message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn run(yaml: &str, format: OutputFormat) -> (Outcome, String) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, yaml).unwrap();

        let args = CheckArgs { path, format };
        let mut out = Vec::new();
        let outcome = execute(&args, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_execute_passing_document() {
        let yaml = r#"
openapi: 3.1.0
info: {title: T, version: 1.0}
paths: {}
components: {schemas: {}}
"#;
        let (outcome, stdout) = run(yaml, OutputFormat::Text);
        assert_eq!(outcome, Outcome::Passed);
        assert_eq!(stdout, "OK: basic validation passed.\n");
    }

    #[test]
    fn test_execute_reports_errors() {
        let yaml = r##"
openapi: 3.1.0
info: {title: T, version: 1.0}
paths:
  users:
    get:
      responses:
        '200':
          content:
            application/json:
              schema: {$ref: "#/components/schemas/User"}
    foo: {}
components: {}
"##;
        let (outcome, stdout) = run(yaml, OutputFormat::Text);
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            stdout,
            "VALIDATION ERRORS:\n\
             - Missing 'components.schemas'\n\
             - Path must start with '/': users\n\
             - Unknown operations in users: foo\n\
             - Broken $ref #/components/schemas/User\n"
        );
    }

    #[test]
    fn test_execute_json_report() {
        let (outcome, stdout) = run("openapi: 3.0.0\n", OutputFormat::Json);
        assert_eq!(outcome, Outcome::Failed);

        let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(report["valid"], false);
        assert_eq!(report["errors"][0], "Missing top-level 'info'");
        assert_eq!(report["errors"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_execute_missing_file() {
        let dir = tempdir().unwrap();
        let args = CheckArgs {
            path: dir.path().join("missing.yaml"),
            format: OutputFormat::Text,
        };
        let mut out = Vec::new();
        let result = execute(&args, &mut out);
        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(out.is_empty());
    }
}
