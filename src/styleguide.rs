//! The styleguide collection.
//!
//! Aggregates blocks from any number of sources and orders them by section.
//! Blocks are appended as parsed; [`Styleguide::sort`] is called once after
//! all sources are added, after which renderers only read.

use crate::error::Result;
use crate::parser::parse_source;
use crate::types::{Block, SectionKey};

/// An ordered collection of documented blocks.
#[derive(Debug, Clone, Default)]
pub struct Styleguide {
    blocks: Vec<Block>,
}

impl Styleguide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append blocks, keeping their order. No deduplication.
    pub fn add(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    /// Parse a whole source text and append its blocks.
    ///
    /// Nothing is appended when any block in the source is malformed.
    /// Returns the number of blocks added.
    pub fn add_source(&mut self, source: &str) -> Result<usize> {
        let blocks = parse_source(source)?;
        let count = blocks.len();
        self.add(blocks);
        Ok(count)
    }

    /// Sort blocks by section in natural numeric order (`1.2` < `1.10`).
    ///
    /// Fails on the first section that is not a dotted number, leaving the
    /// collection in its previous order. Blocks with equal sections keep
    /// their insertion order.
    pub fn sort(&mut self) -> Result<()> {
        let keys = self
            .blocks
            .iter()
            .map(Block::section_key)
            .collect::<Result<Vec<SectionKey>>>()?;

        let mut keyed: Vec<(SectionKey, Block)> =
            keys.into_iter().zip(self.blocks.drain(..)).collect();
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

        self.blocks = keyed.into_iter().map(|(_, block)| block).collect();
        Ok(())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleguideError;
    use pretty_assertions::assert_eq;

    fn block(name: &str, section: &str) -> Block {
        Block::new(name, "", vec![], "", section)
    }

    fn sections(guide: &Styleguide) -> Vec<&str> {
        guide.iter().map(Block::section).collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut guide = Styleguide::new();
        guide.add(vec![block("a", "2"), block("b", "1")]);
        guide.add(vec![block("c", "3")]);

        assert_eq!(guide.len(), 3);
        assert_eq!(sections(&guide), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_is_numeric() {
        let mut guide = Styleguide::new();
        guide.add(vec![
            block("a", "2.1"),
            block("b", "1.10"),
            block("c", "1.9"),
            block("d", "1.2.1"),
            block("e", "1.2"),
            block("f", "10"),
        ]);

        guide.sort().unwrap();

        assert_eq!(sections(&guide), vec!["1.2", "1.2.1", "1.9", "1.10", "2.1", "10"]);
    }

    #[test]
    fn test_sort_strips_trailing_dot() {
        let mut guide = Styleguide::new();
        guide.add(vec![block("a", "2."), block("b", "1.")]);

        guide.sort().unwrap();

        assert_eq!(sections(&guide), vec!["1.", "2."]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_sections() {
        let mut guide = Styleguide::new();
        guide.add(vec![block("first", "1.1"), block("zero", "1"), block("second", "1.1")]);

        guide.sort().unwrap();

        let names: Vec<&str> = guide.iter().map(Block::name).collect();
        assert_eq!(names, vec!["zero", "first", "second"]);
    }

    #[test]
    fn test_sort_fails_on_non_numeric_section() {
        let mut guide = Styleguide::new();
        guide.add(vec![block("a", "2"), block("b", "1.x")]);

        let err = guide.sort().unwrap_err();

        assert!(matches!(err, StyleguideError::MalformedSection { .. }));
        assert_eq!(sections(&guide), vec!["2", "1.x"]);
    }

    #[test]
    fn test_add_source() {
        let mut guide = Styleguide::new();

        let added = guide
            .add_source("// Alerts\n//\n// Styleguide 3\n.alert {}\n")
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(guide.blocks()[0].name(), "Alerts");
    }

    #[test]
    fn test_add_source_is_all_or_nothing() {
        let mut guide = Styleguide::new();
        let source = "// Ok\n//\n// Styleguide 1\na {}\n// Bad\n//\n// .x\n//\n// Styleguide 2\nb {}\n";

        assert!(guide.add_source(source).is_err());
        assert!(guide.is_empty());
    }

    #[test]
    fn test_empty_guide_sorts() {
        let mut guide = Styleguide::new();
        guide.sort().unwrap();
        assert!(guide.into_blocks().is_empty());
    }
}
