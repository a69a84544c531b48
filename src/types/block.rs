//! Block type - one documented component.
//!
//! Blocks are produced by the block parser from a single comment run:
//!
//! ```text
//! // Button
//! //
//! // Clickable call to action.
//! //
//! // .primary - Main action
//! // :hover   - Hover state
//! //
//! // <button class="$modifier">Save</button>
//! //
//! // Styleguide 2.1
//! ```

use serde::Serialize;

use crate::error::Result;

use super::{Modifier, SectionKey};

/// A documentation entry for one reusable component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    name: String,
    description: String,
    modifiers: Vec<Modifier>,
    example: String,
    section: String,
}

impl Block {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        modifiers: Vec<Modifier>,
        example: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            modifiers,
            example: example.into(),
            section: section.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description lines joined by newlines (empty when absent).
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Example markup, verbatim (empty when absent).
    pub fn example(&self) -> &str {
        &self.example
    }

    /// Section identifier as written, e.g. `1.2`.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Parse the section identifier for ordering.
    pub fn section_key(&self) -> Result<SectionKey> {
        SectionKey::parse(&self.section)
    }

    /// True when the block carries only a name and a section.
    pub fn is_module(&self) -> bool {
        self.description.is_empty() && self.modifiers.is_empty() && self.example.is_empty()
    }

    /// Example markup with `$modifier` replaced by the given class.
    pub fn example_with(&self, markup_class: &str) -> String {
        self.example.replace(MODIFIER_PLACEHOLDER, markup_class)
    }

    /// Whether the example refers to `$modifier` at all.
    pub fn has_placeholder(&self) -> bool {
        self.example.contains(MODIFIER_PLACEHOLDER)
    }
}

/// Placeholder in example markup substituted with each modifier's class.
pub const MODIFIER_PLACEHOLDER: &str = "$modifier";
