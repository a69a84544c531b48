//! Rendering module for styleguide.
//!
//! Turns sorted blocks into output documents: a self-contained HTML page or
//! a JSON export. Both work from the same serializable block views.

mod highlight;
mod html;
mod json;

pub use highlight::{highlight_html, style_defs};
pub use html::{render_html, HtmlOptions};
pub use json::render_json;

use serde::Serialize;

use crate::types::{Block, Modifier};

/// A modifier as seen by templates and exports.
#[derive(Debug, Clone, Serialize)]
pub struct ModifierView<'a> {
    pub selector: &'a str,
    pub description: &'a str,
    pub markup_class: &'a str,
}

impl<'a> From<&'a Modifier> for ModifierView<'a> {
    fn from(modifier: &'a Modifier) -> Self {
        Self {
            selector: modifier.selector(),
            description: modifier.description(),
            markup_class: modifier.markup_class(),
        }
    }
}

/// A block as seen by templates and exports.
#[derive(Debug, Clone, Serialize)]
pub struct BlockView<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub modifiers: Vec<ModifierView<'a>>,
    pub example: &'a str,
    pub section: &'a str,
    pub is_module: bool,
}

impl<'a> From<&'a Block> for BlockView<'a> {
    fn from(block: &'a Block) -> Self {
        Self {
            name: block.name(),
            description: block.description(),
            modifiers: block.modifiers().iter().map(ModifierView::from).collect(),
            example: block.example(),
            section: block.section(),
            is_module: block.is_module(),
        }
    }
}
