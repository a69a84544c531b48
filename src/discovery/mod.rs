//! File discovery and loading for styleguide projects.
//!
//! Finds every documented stylesheet in a project directory, either by
//! convention (scan for known extensions) or via a `styleguide.yaml`
//! manifest.
//!
//! # Example
//!
//! ```ignore
//! use styleguide::discovery::discover;
//!
//! let result = discover("./my-project")?;
//! println!("Found {} stylesheets", result.scan.total());
//!
//! let loaded = result.load()?;
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{load_file, load_styleguide, Loaded};
pub use manifest::{Manifest, DEFAULT_TITLE};
pub use scanner::{scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "styleguide.yaml";

/// Result of discovering stylesheets in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (may be default if no styleguide.yaml found).
    pub manifest: Manifest,

    /// Whether a styleguide.yaml manifest was found.
    pub has_manifest: bool,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Parse all discovered files into a sorted styleguide.
    pub fn load(&self) -> Result<Loaded> {
        load_styleguide(&self.scan)
    }
}

/// Discover stylesheets in a project directory.
///
/// Looks for a `styleguide.yaml` manifest in the root directory. If found,
/// uses the manifest's source paths. Otherwise, scans the entire directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover stylesheets from specific paths (no manifest lookup).
///
/// Directories are scanned with default settings; files are taken as given
/// so any extension can be documented explicitly. Order follows `paths`.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else {
            // Missing files surface as load errors naming the path
            scan.push(path.clone());
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}

/// Discover from explicit paths, or from the current directory when none
/// are given.
pub fn discover_or_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    if paths.is_empty() {
        discover(".")
    } else {
        discover_paths(paths)
    }
}
