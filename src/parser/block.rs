//! Block parser.
//!
//! Turns one comment run (comment prefixes already stripped) into a `Block`.
//! The run is split into blank-line separated groups; the first group is the
//! name, the last unmarked group is the section line, and the groups in
//! between are classified by their leading character.

use crate::error::{Result, StyleguideError};
use crate::types::{Block, Modifier};

use super::modifier::parse_modifier;

/// What a group of lines declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupKind {
    Description,
    Modifiers,
    Example,
    Section,
}

/// Parse a comment run into a block.
///
/// Description, modifiers and example are optional and may appear in any
/// order before the section line. When the same kind appears twice the later
/// group replaces the earlier one.
pub fn parse_block<S: AsRef<str>>(lines: &[S]) -> Result<Block> {
    let groups = split_groups(lines);

    let (name_group, rest) = groups.split_first().ok_or_else(|| {
        StyleguideError::malformed_block("comment block is empty", None)
    })?;

    let name = match *name_group {
        [name] => name.as_ref().to_string(),
        _ => {
            return Err(StyleguideError::malformed_block(
                format!(
                    "name must be a single line, found {} lines starting with '{}'",
                    name_group.len(),
                    name_group[0].as_ref()
                ),
                Some("Leave a blank comment line between the name and the description"),
            ))
        }
    };

    let mut description = String::new();
    let mut modifiers: Vec<Modifier> = Vec::new();
    let mut example = String::new();

    let mut index = 0;
    let section = loop {
        let Some(&group) = rest.get(index) else {
            return Err(StyleguideError::malformed_block(
                format!("block '{}' has no section line", name),
                Some("End the block with a line like `Styleguide 1.2`"),
            ));
        };
        let is_last = index + 1 == rest.len();

        match classify(group, is_last) {
            GroupKind::Example => example = join(group),
            GroupKind::Modifiers => {
                modifiers = group
                    .iter()
                    .map(|line| parse_modifier(line.as_ref()))
                    .collect::<Result<_>>()?;
            }
            GroupKind::Description => description = join(group),
            GroupKind::Section => break parse_section_line(&name, group[0].as_ref())?,
        }

        index += 1;
    };

    Ok(Block::new(name, description, modifiers, example, section))
}

/// Split lines into maximal runs of non-empty lines.
fn split_groups<S: AsRef<str>>(lines: &[S]) -> Vec<&[S]> {
    lines
        .split(|line| line.as_ref().is_empty())
        .filter(|group| !group.is_empty())
        .collect()
}

/// Classify a non-empty group by the first character of its first line.
fn classify<S: AsRef<str>>(group: &[S], is_last: bool) -> GroupKind {
    let first: &str = group[0].as_ref();

    if first.starts_with('<') {
        GroupKind::Example
    } else if first.starts_with('.') || first.starts_with(':') {
        GroupKind::Modifiers
    } else if is_last {
        GroupKind::Section
    } else {
        GroupKind::Description
    }
}

/// Take the identifier from a `Styleguide 1.2` line.
fn parse_section_line(name: &str, line: &str) -> Result<String> {
    line.split_whitespace()
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| {
            StyleguideError::malformed_block(
                format!("section line '{}' of block '{}' has no identifier", line, name),
                Some("Write the section as `Styleguide 1.2`"),
            )
        })
}

fn join<S: AsRef<str>>(group: &[S]) -> String {
    let lines: Vec<&str> = group.iter().map(|line| line.as_ref()).collect();
    lines.join("\n")
}
