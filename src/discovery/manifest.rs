//! Project manifest (styleguide.yaml) parsing.
//!
//! The manifest defines project configuration including source paths,
//! the documented stylesheet and output settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleguideError};

/// Project manifest loaded from styleguide.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories or files to scan for stylesheets.
    /// Defaults to current directory if empty.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Stylesheet linked from the generated page (href).
    #[serde(default)]
    pub stylesheet: Option<String>,

    /// Output file for the rendered styleguide.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Page title.
    #[serde(default)]
    pub title: Option<String>,

    /// File extensions treated as stylesheets (without the dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Patterns to exclude from discovery.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("styleguide.html")
}

fn default_extensions() -> Vec<String> {
    ["scss", "less", "sass", "styl"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Title used when neither the manifest nor the command line names one.
pub const DEFAULT_TITLE: &str = "Styleguide";

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            stylesheet: None,
            output: default_output(),
            title: None,
            extensions: default_extensions(),
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a styleguide.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StyleguideError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| StyleguideError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check styleguide.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Whether a file has one of the configured stylesheet extensions.
    pub fn is_stylesheet(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Get the effective page title.
    pub fn effective_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}
