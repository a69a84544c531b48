//! Modifier line parser.
//!
//! Parses lines of the form `<selector> - <description>`:
//!
//! ```text
//! .primary      - Main call to action
//! :hover        - Hover state
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, StyleguideError};
use crate::types::Modifier;

static MODIFIER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([.:]?\S+)\s+-\s+(\S.*)$").unwrap());

/// Parse one modifier line.
///
/// The selector may not contain whitespace and must be separated from the
/// description by a hyphen with whitespace on both sides. The description
/// is trimmed and must not be empty.
pub fn parse_modifier(line: &str) -> Result<Modifier> {
    let malformed = || StyleguideError::MalformedModifier {
        line: line.to_string(),
    };

    let caps = MODIFIER_LINE.captures(line.trim()).ok_or_else(malformed)?;

    let selector = caps[1].trim();
    let description = caps[2].trim();

    if selector.is_empty() || description.is_empty() {
        return Err(malformed());
    }

    Ok(Modifier::new(selector, description))
}
