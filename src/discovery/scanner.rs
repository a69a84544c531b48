//! File system scanner for discovering stylesheets.
//!
//! Recursively scans directories to find all stylesheet files whose
//! extension the manifest lists (`.scss`, `.less`, ...).

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning for stylesheets.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered stylesheet files, in walk order.
    pub files: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Add a file unless it is already present.
    pub fn push(&mut self, path: PathBuf) {
        if !self.files.contains(&path) {
            self.files.push(path);
        }
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        for path in other.files {
            self.push(path);
        }
    }
}

/// Scan a directory for stylesheet files.
///
/// Entries are visited in file-name order so the result is stable across
/// platforms.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if manifest.is_excluded(path) {
            continue;
        }

        if manifest.is_stylesheet(path) {
            result.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths (relative to root).
///
/// Directories are scanned recursively; files are taken as given, whatever
/// their extension.
pub fn scan_sources(sources: &[String], root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let path = root.join(source);

        if path.is_dir() {
            result.merge(scan_directory(&path, manifest));
        } else if path.is_file() {
            result.push(path);
        }
    }

    result
}
