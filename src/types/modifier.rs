//! Modifier type for component variants.
//!
//! A modifier is a class (`.primary`) or pseudo-class (`:hover`) that alters
//! how a documented component looks. Example markup refers to it through the
//! `$modifier` placeholder.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::StyleguideError;

/// A state or variant selector attached to a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modifier {
    selector: String,
    description: String,
}

impl Modifier {
    /// Create a modifier from an already validated selector and description.
    pub(crate) fn new(selector: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            description: description.into(),
        }
    }

    /// The selector as written, e.g. `.primary` or `:hover`.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this is a pseudo-class (`:hover`) rather than a class.
    pub fn is_pseudo_class(&self) -> bool {
        self.selector.starts_with(':')
    }

    /// The value substituted for `$modifier` in example markup.
    ///
    /// Class selectors lose their leading `.`; pseudo-classes pass through.
    pub fn markup_class(&self) -> &str {
        self.selector.strip_prefix('.').unwrap_or(&self.selector)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.selector, self.description)
    }
}

impl FromStr for Modifier {
    type Err = StyleguideError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_modifier(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_class_strips_dot() {
        let modifier = Modifier::new(".primary", "Main call to action");
        assert_eq!(modifier.markup_class(), "primary");
        assert!(!modifier.is_pseudo_class());
    }

    #[test]
    fn test_markup_class_keeps_pseudo_class() {
        let modifier = Modifier::new(":hover", "Highlight on hover");
        assert_eq!(modifier.markup_class(), ":hover");
        assert!(modifier.is_pseudo_class());
    }

    #[test]
    fn test_display_matches_source_form() {
        let modifier = Modifier::new(".large", "Bigger");
        assert_eq!(modifier.to_string(), ".large - Bigger");
    }

    #[test]
    fn test_from_str() {
        let modifier: Modifier = ".disabled - Greyed out".parse().unwrap();
        assert_eq!(modifier.selector(), ".disabled");
        assert_eq!(modifier.description(), "Greyed out");

        assert!(".disabled".parse::<Modifier>().is_err());
    }
}
