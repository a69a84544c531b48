//! styleguide - Living styleguide generator
//!
//! Extracts documentation blocks from `//` comments in stylesheets, parses
//! them into named, sectioned blocks with modifiers and example markup, and
//! renders them in section order.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod styleguide;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, DiscoveryResult, Loaded, Manifest, ScanResult};
pub use error::{Result, StyleguideError};
pub use parser::{parse_block, parse_modifier, parse_source};
pub use render::{render_html, render_json, HtmlOptions};
pub use styleguide::Styleguide;
pub use types::{Block, Modifier, SectionKey, MODIFIER_PLACEHOLDER};
pub use validation::{validate_styleguide, Diagnostic, Severity, ValidationResult};
