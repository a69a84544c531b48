//! List command implementation.
//!
//! Discovers stylesheets and prints each block's section and name in
//! sorted order.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover_or_paths;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::styleguide::Styleguide;

/// List documented blocks in section order
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Files or directories to scan (default: styleguide.yaml or current directory)
    pub paths: Vec<PathBuf>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let discovery = discover_or_paths(&args.paths)?;
    let loaded = discovery.load()?;

    let mut stdout = io::stdout().lock();
    write_listing(&mut stdout, &loaded.styleguide)?;

    printer.info(
        "Listed",
        &format!(
            "{} from {}",
            plural(loaded.styleguide.len(), "block", "blocks"),
            plural(loaded.files.len(), "file", "files")
        ),
    );

    Ok(())
}

/// One line per block; modules are flush left, components indented by depth.
fn write_listing(out: &mut impl Write, guide: &Styleguide) -> io::Result<()> {
    for block in guide.iter() {
        let depth = block.section_key().map(|key| key.depth()).unwrap_or(1);
        let indent = "  ".repeat(depth.saturating_sub(1));
        writeln!(out, "{}{} {}", indent, block.section(), block.name())?;
    }
    Ok(())
}
