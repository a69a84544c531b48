//! Section identifiers and their natural ordering.

use std::fmt;

use crate::error::{Result, StyleguideError};

/// Parsed form of a dotted section identifier such as `1.2` or `10.3.1`.
///
/// Keys compare segment by segment as integers, so `1.2 < 1.10` and a key
/// sorts before any longer key it prefixes (`1.2 < 1.2.1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionKey(Vec<u64>);

impl SectionKey {
    /// Parse a section identifier. A single trailing `.` is ignored.
    pub fn parse(section: &str) -> Result<Self> {
        let trimmed = section.strip_suffix('.').unwrap_or(section);

        let segments = trimmed
            .split('.')
            .map(|segment| parse_segment(section, segment))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self(segments))
    }

    pub fn segments(&self) -> &[u64] {
        &self.0
    }

    /// Nesting depth (`1` is top level, `1.2` is depth 2).
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

fn parse_segment(section: &str, segment: &str) -> Result<u64> {
    let malformed = || StyleguideError::MalformedSection {
        section: section.to_string(),
        segment: segment.to_string(),
    };

    // `u64::from_str` would also take a leading `+`
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    segment.parse().map_err(|_| malformed())
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}
