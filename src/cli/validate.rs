//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover_or_paths;
use crate::error::{Result, StyleguideError};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_styleguide, ValidationResult};

/// Check documentation blocks without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to check (default: styleguide.yaml or current directory)
    pub paths: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = discover_or_paths(&args.paths)?;
    printer.status("Checking", &plural(discovery.scan.total(), "file", "files"));

    let loaded = discovery.load()?;

    let mut result = loaded.diagnostics;
    result.merge(validate_styleguide(&loaded.styleguide));
    print_diagnostics(&result, printer);

    summarize(&result, loaded.styleguide.len(), printer)
}

fn summarize(result: &ValidationResult, blocks: usize, printer: &Printer) -> Result<()> {
    if result.has_errors() {
        return Err(StyleguideError::Validation {
            message: format!(
                "{} and {}",
                plural(result.error_count(), "error", "errors"),
                plural(result.warning_count(), "warning", "warnings")
            ),
            help: Some("Fix the errors above and run `styleguide validate` again".to_string()),
        });
    }

    let mut summary = plural(blocks, "block", "blocks");
    if result.has_warnings() {
        summary.push_str(&format!(
            " ({})",
            plural(result.warning_count(), "warning", "warnings")
        ));
    }
    printer.status("Finished", &summary);

    Ok(())
}
