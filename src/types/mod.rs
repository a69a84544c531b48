//! Core domain types for styleguide.
//!
//! - `Block` - one documented component
//! - `Modifier` - a class or pseudo-class variant of a component
//! - `SectionKey` - parsed section identifier used for ordering

mod block;
mod modifier;
mod section;

pub use block::{Block, MODIFIER_PLACEHOLDER};
pub use modifier::Modifier;
pub use section::SectionKey;
