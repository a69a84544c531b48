//! Validation system for loaded styleguides.
//!
//! Runs a suite of checks against a sorted styleguide and reports errors
//! and warnings. Used by both `styleguide validate` and `styleguide build`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::styleguide::Styleguide;

/// Run all validation checks against the styleguide.
pub fn validate_styleguide(guide: &Styleguide) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_duplicate_sections(guide));
    result.merge(checks::check_unused_modifiers(guide));
    result.merge(checks::check_duplicate_modifiers(guide));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("{}{}", label, printer.dim(&format!(" {}", d)));
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.cyan("help:"), help);
        }
    }
}
