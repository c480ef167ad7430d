#![deny(missing_docs)]

//! # oas-check CLI
//!
//! Basic structural validation of an OpenAPI description.
//!
//! Exit status: `0` when the document passes, `1` when issues were found,
//! `2` when the document could not be loaded.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod check;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Basic structural validation for OpenAPI documents")]
struct Cli {
    #[clap(flatten)]
    check: check::CheckArgs,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();

    match check::execute(&cli.check, &mut stdout.lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
