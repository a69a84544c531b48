//! Init command implementation.
//!
//! Generates a `styleguide.yaml` manifest from discovered stylesheets.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, MANIFEST_FILENAME};
use crate::error::{Result, StyleguideError};
use crate::output::{display_path, plural, Printer};

/// Initialize a styleguide project by generating a styleguide.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing styleguide.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(StyleguideError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;

    let source_dirs = source_dirs(&discovery.scan.files, &discovery.root);
    let yaml = manifest_yaml(&source_dirs);

    fs::write(&manifest_path, &yaml).map_err(|e| StyleguideError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(String::as_str).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(discovery.scan.total(), "stylesheet", "stylesheets")
        ),
    );

    Ok(())
}

/// Unique parent directories of `files`, relative to `root`.
fn source_dirs(files: &[PathBuf], root: &Path) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|file| file.parent())
        .map(|parent| {
            let relative = parent.strip_prefix(root).unwrap_or(parent);
            if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            }
        })
        .collect()
}

fn manifest_yaml(source_dirs: &BTreeSet<String>) -> String {
    let mut yaml = String::new();

    // A lone "." is the default and needs no sources list
    if !(source_dirs.is_empty() || (source_dirs.len() == 1 && source_dirs.contains("."))) {
        yaml.push_str("sources:\n");
        for dir in source_dirs {
            yaml.push_str(&format!("  - \"{}\"\n", dir));
        }
    }

    yaml.push_str("# stylesheet: css/main.css\n");
    yaml.push_str("output: styleguide.html\n");
    yaml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Manifest;
    use tempfile::tempdir;

    const BLOCK: &str = "// Button\n//\n// Styleguide 1.1\n.btn {}\n";

    fn quiet() -> Printer {
        Printer::new().quiet(true)
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("buttons.scss"), BLOCK).unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &quiet()).unwrap();

        let content = fs::read_to_string(dir.path().join("styleguide.yaml")).unwrap();
        assert!(content.contains("output: styleguide.html"));
        assert!(!content.contains("sources:"));
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("styleguide.yaml"), "output: x.html").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        assert!(run(args, &quiet()).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("styleguide.yaml"), "output: x.html").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &quiet()).unwrap();

        let content = fs::read_to_string(dir.path().join("styleguide.yaml")).unwrap();
        assert!(content.contains("output: styleguide.html"));
    }

    #[test]
    fn test_init_discovers_source_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scss/components")).unwrap();
        fs::create_dir_all(dir.path().join("less")).unwrap();
        fs::write(dir.path().join("scss/components/buttons.scss"), BLOCK).unwrap();
        fs::write(dir.path().join("less/forms.less"), BLOCK).unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &quiet()).unwrap();

        let content = fs::read_to_string(dir.path().join("styleguide.yaml")).unwrap();
        assert!(content.contains("sources:"));
        assert!(content.contains("\"less/\""));
        assert!(content.contains("\"scss/components/\""));
    }

    #[test]
    fn test_generated_manifest_parses() {
        let dirs: BTreeSet<String> = ["a/".to_string(), "b/".to_string()].into_iter().collect();

        let manifest = Manifest::parse(&manifest_yaml(&dirs)).unwrap();

        assert_eq!(manifest.sources, vec!["a/", "b/"]);
        assert_eq!(manifest.output, PathBuf::from("styleguide.html"));
        assert!(manifest.stylesheet.is_none());
    }
}
