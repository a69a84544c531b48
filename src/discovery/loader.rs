//! Stylesheet loader - parses discovered files into a styleguide.
//!
//! Reads every scanned file, parses its documentation blocks and collects
//! them into a sorted `Styleguide`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StyleguideError};
use crate::parser::{parse_source_detailed, ParsedSource};
use crate::styleguide::Styleguide;
use crate::validation::{Diagnostic, ValidationResult};

use super::scanner::ScanResult;

/// A loaded, sorted styleguide plus load-time diagnostics.
#[derive(Debug, Default)]
pub struct Loaded {
    pub styleguide: Styleguide,

    /// Warnings raised while reading sources (e.g. dropped trailing blocks).
    pub diagnostics: ValidationResult,

    /// Number of blocks contributed by each file, in load order.
    pub files: Vec<(PathBuf, usize)>,
}

/// Load all scanned files into a sorted styleguide.
///
/// Stops at the first file that fails to read or parse; the error names the
/// file. Sorting fails on a non-numeric section.
pub fn load_styleguide(scan: &ScanResult) -> Result<Loaded> {
    let mut loaded = Loaded::default();

    for path in &scan.files {
        let parsed = load_file(path).map_err(|e| StyleguideError::Load {
            path: path.clone(),
            source: Box::new(e),
        })?;

        if let Some(run) = &parsed.unterminated {
            loaded.diagnostics.push(unterminated_warning(path, run));
        }

        loaded.files.push((path.clone(), parsed.blocks.len()));
        loaded.styleguide.add(parsed.blocks);
    }

    loaded.styleguide.sort()?;

    Ok(loaded)
}

/// Read and parse a single stylesheet.
pub fn load_file(path: &Path) -> Result<ParsedSource> {
    let content = fs::read_to_string(path).map_err(|e| StyleguideError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_source_detailed(&content)
}

fn unterminated_warning(path: &Path, run: &[String]) -> Diagnostic {
    let name = run.first().map(String::as_str).unwrap_or_default();

    Diagnostic::warning(
        "styleguide::load::unterminated",
        format!(
            "{}: block '{}' at the end of the file was skipped",
            path.display(),
            name
        ),
    )
    .with_help("Add a line of code or an empty line after the `Styleguide` line")
}
