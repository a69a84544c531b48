//! Build command implementation.
//!
//! Discovers documented stylesheets, parses and sorts their blocks, and
//! writes a styleguide page (or a JSON export).

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::discovery::{discover_or_paths, DiscoveryResult};
use crate::error::{Result, StyleguideError};
use crate::output::{display_path, plural, Printer};
use crate::render::{render_html, render_json, HtmlOptions};
use crate::validation::{print_diagnostics, validate_styleguide};

/// Output document format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Self-contained HTML page
    #[default]
    Html,
    /// JSON array of blocks
    Json,
}

/// Build a styleguide page from documented stylesheets
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Files or directories to scan (default: styleguide.yaml or current directory)
    pub paths: Vec<PathBuf>,

    /// Stylesheet the page links to (overrides the manifest)
    #[arg(long)]
    pub stylesheet: Option<String>,

    /// Output file (default: manifest output, styleguide.html)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Page title (overrides the manifest)
    #[arg(long)]
    pub title: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Write the document to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let discovery = discover_or_paths(&args.paths)?;

    printer.status(
        "Scanning",
        &format!(
            "{} {}",
            display_path(&discovery.root),
            printer.dim(&format!("({})", plural(discovery.scan.total(), "file", "files")))
        ),
    );
    if discovery.scan.is_empty() {
        printer.warning("warning", "no stylesheets found");
    }

    let loaded = discovery.load()?;
    for (path, count) in &loaded.files {
        printer.status(
            "Parsing",
            &format!(
                "{} {}",
                display_path(path),
                printer.dim(&format!("({})", plural(*count, "block", "blocks")))
            ),
        );
    }

    let mut diagnostics = loaded.diagnostics;
    diagnostics.merge(validate_styleguide(&loaded.styleguide));
    print_diagnostics(&diagnostics, printer);

    let blocks = loaded.styleguide.blocks();
    printer.status(
        "Rendering",
        &format!("{} as {:?}", plural(blocks.len(), "block", "blocks"), args.format).to_lowercase(),
    );
    let document = match args.format {
        Format::Html => render_html(blocks, &html_options(&args, &discovery)?)?,
        Format::Json => render_json(blocks)?,
    };

    if args.stdout {
        let mut stdout = io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.write_all(b"\n")?;
        return Ok(());
    }

    let output = output_path(&args, &discovery);
    write_document(&output, &document)?;

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(blocks.len(), "block", "blocks"),
            printer.cyan(&display_path(&output))
        ),
    );

    Ok(())
}

fn html_options(args: &BuildArgs, discovery: &DiscoveryResult) -> Result<HtmlOptions> {
    let stylesheet = args
        .stylesheet
        .clone()
        .or_else(|| discovery.manifest.stylesheet.clone())
        .ok_or_else(|| StyleguideError::Build {
            message: "No stylesheet to link from the styleguide page".to_string(),
            help: Some(
                "Pass --stylesheet <HREF> or set `stylesheet` in styleguide.yaml".to_string(),
            ),
        })?;

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| discovery.manifest.effective_title().to_string());

    Ok(HtmlOptions {
        title,
        stylesheet: Some(stylesheet),
    })
}

/// Resolve where the document goes. Manifest outputs are relative to the
/// project root; JSON exports swap the default extension.
fn output_path(args: &BuildArgs, discovery: &DiscoveryResult) -> PathBuf {
    if let Some(output) = &args.output {
        return output.clone();
    }

    let base = if discovery.has_manifest {
        discovery.root.join(&discovery.manifest.output)
    } else {
        discovery.manifest.output.clone()
    };

    match args.format {
        Format::Html => base,
        Format::Json => base.with_extension("json"),
    }
}

fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StyleguideError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, document).map_err(|e| StyleguideError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BUTTONS: &str = r#"// Buttons
//
// Styleguide 1

// Button
//
// Standard button.
//
// .primary - Main action
// :hover - Hovered
//
// <button class="btn $modifier">Save</button>
//
// Styleguide 1.1
.btn { color: red; }
"#;

    fn args(paths: Vec<PathBuf>, output: Option<PathBuf>) -> BuildArgs {
        BuildArgs {
            paths,
            stylesheet: Some("app.css".to_string()),
            output,
            title: None,
            format: Format::Html,
            stdout: false,
        }
    }

    fn quiet() -> Printer {
        Printer::new().quiet(true)
    }

    #[test]
    fn test_build_html_page() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("buttons.scss");
        let output = dir.path().join("out/guide.html");
        fs::write(&source, BUTTONS).unwrap();

        run(args(vec![source], Some(output.clone())), &quiet()).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>Styleguide</title>"));
        assert!(html.contains("1 Buttons"));
        assert!(html.contains("1.1 Button"));
        assert!(html.contains("<button class=\"btn primary\">Save</button>"));
    }

    #[test]
    fn test_build_uses_title_flag() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("buttons.scss");
        let output = dir.path().join("guide.html");
        fs::write(&source, BUTTONS).unwrap();

        let mut build = args(vec![source], Some(output.clone()));
        build.title = Some("Acme".to_string());
        run(build, &quiet()).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>Acme</title>"));
    }

    #[test]
    fn test_build_json_export() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("buttons.scss");
        let output = dir.path().join("blocks.json");
        fs::write(&source, BUTTONS).unwrap();

        let mut build = args(vec![source], Some(output.clone()));
        build.format = Format::Json;
        build.stylesheet = None;
        run(build, &quiet()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value[0]["section"], "1");
        assert_eq!(value[1]["name"], "Button");
    }

    #[test]
    fn test_build_html_requires_stylesheet() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("buttons.scss");
        fs::write(&source, BUTTONS).unwrap();

        let mut build = args(vec![source], Some(dir.path().join("guide.html")));
        build.stylesheet = None;

        let err = run(build, &quiet()).unwrap_err();
        assert!(matches!(err, StyleguideError::Build { .. }));
    }

    #[test]
    fn test_build_reports_malformed_file() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("bad.scss");
        fs::write(&source, "// A\n// B\n//\n// Styleguide 1\n.a {}\n").unwrap();

        let err = run(args(vec![source], Some(dir.path().join("g.html"))), &quiet()).unwrap_err();
        assert!(matches!(err, StyleguideError::Load { .. }));
    }

    #[test]
    fn test_output_path_from_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("styleguide.yaml"),
            "output: public/guide.html\nstylesheet: app.css\n",
        )
        .unwrap();
        let discovery = crate::discovery::discover(dir.path()).unwrap();

        let html = output_path(&args(vec![], None), &discovery);
        assert_eq!(html, dir.path().join("public/guide.html"));

        let mut json = args(vec![], None);
        json.format = Format::Json;
        assert_eq!(
            output_path(&json, &discovery),
            dir.path().join("public/guide.json")
        );
    }

    #[test]
    fn test_stylesheet_falls_back_to_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("styleguide.yaml"), "stylesheet: site.css\ntitle: Site\n").unwrap();
        let discovery = crate::discovery::discover(dir.path()).unwrap();

        let mut build = args(vec![], None);
        build.stylesheet = None;
        let options = html_options(&build, &discovery).unwrap();

        assert_eq!(options.stylesheet.as_deref(), Some("site.css"));
        assert_eq!(options.title, "Site");
    }
}
