//! Parser modules for documented stylesheets.
//!
//! Documentation lives in `//` comment blocks inside stylesheet sources.
//!
//! # Block Structure
//!
//! Each block is a run of comment lines split into groups by blank comment
//! lines:
//! - A one-line name (required)
//! - A free-text description (optional)
//! - Modifier lines `.class - Description` or `:pseudo - Description` (optional)
//! - Example markup starting with `<` (optional)
//! - The section line `Styleguide 1.2` (required, always last)
//!
//! # Usage
//!
//! ```ignore
//! use styleguide::parser::parse_source;
//!
//! let source = std::fs::read_to_string("scss/buttons.scss")?;
//! for block in parse_source(&source)? {
//!     println!("{} {}", block.section(), block.name());
//! }
//! ```

mod block;
mod extract;
mod modifier;

pub use block::parse_block;
pub use extract::{extract_runs, CommentRuns, COMMENT_PREFIX, MARKER};
pub use modifier::parse_modifier;

use crate::error::Result;
use crate::types::Block;

/// Blocks parsed from one source text.
#[derive(Debug, Clone, Default)]
pub struct ParsedSource {
    /// Blocks in source order.
    pub blocks: Vec<Block>,

    /// A documentation run at the end of the source that was not followed
    /// by a non-comment line and therefore not parsed.
    pub unterminated: Option<Vec<String>>,
}

/// Parse every documentation block in a source text.
///
/// The first malformed block aborts the whole source.
pub fn parse_source(source: &str) -> Result<Vec<Block>> {
    Ok(parse_source_detailed(source)?.blocks)
}

/// Parse a source text and also report an unterminated trailing block.
pub fn parse_source_detailed(source: &str) -> Result<ParsedSource> {
    let mut runs = extract_runs(source.lines());

    let blocks = runs
        .by_ref()
        .map(|run| parse_block(&run))
        .collect::<Result<Vec<_>>>()?;

    Ok(ParsedSource {
        blocks,
        unterminated: runs.into_unterminated(),
    })
}
