//! Validation checks for a loaded styleguide.
//!
//! Each check takes a `&Styleguide` and returns a `ValidationResult`.

use std::collections::HashMap;

use crate::styleguide::Styleguide;
use crate::types::{SectionKey, MODIFIER_PLACEHOLDER};

use super::warning::{Diagnostic, ValidationResult};

/// Check for blocks sharing a section number (`1.2` and `1.2.` count as one).
pub fn check_duplicate_sections(guide: &Styleguide) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<SectionKey, &str> = HashMap::new();

    for block in guide.iter() {
        // Non-numeric sections are rejected by sorting before validation runs
        let Ok(key) = block.section_key() else {
            continue;
        };

        if let Some(first) = seen.get(&key) {
            result.push(
                Diagnostic::warning(
                    "styleguide::validate::duplicate-section",
                    format!(
                        "'{}' reuses section {} already taken by '{}'",
                        block.name(),
                        key,
                        first
                    ),
                )
                .in_section(block.section())
                .with_help("Give every block its own section number"),
            );
        } else {
            seen.insert(key, block.name());
        }
    }

    result
}

/// Check for modifiers that can never show up in the rendered example.
pub fn check_unused_modifiers(guide: &Styleguide) -> ValidationResult {
    let mut result = ValidationResult::new();

    for block in guide.iter().filter(|b| !b.modifiers().is_empty()) {
        if block.example().is_empty() {
            result.push(
                Diagnostic::warning(
                    "styleguide::validate::modifiers-without-example",
                    format!("'{}' lists modifiers but has no example markup", block.name()),
                )
                .in_section(block.section())
                .with_help("Add example markup starting with `<`"),
            );
        } else if !block.has_placeholder() {
            result.push(
                Diagnostic::warning(
                    "styleguide::validate::missing-placeholder",
                    format!(
                        "'{}' lists modifiers but its example never uses {}",
                        block.name(),
                        MODIFIER_PLACEHOLDER
                    ),
                )
                .in_section(block.section())
                .with_help(format!(
                    "Add {} to a class attribute in the example",
                    MODIFIER_PLACEHOLDER
                )),
            );
        }
    }

    result
}

/// Check for modifiers declared twice on the same block.
pub fn check_duplicate_modifiers(guide: &Styleguide) -> ValidationResult {
    let mut result = ValidationResult::new();

    for block in guide.iter() {
        let mut seen: Vec<&str> = Vec::new();
        for modifier in block.modifiers() {
            if seen.contains(&modifier.selector()) {
                result.push(
                    Diagnostic::error(
                        "styleguide::validate::duplicate-modifier",
                        format!(
                            "'{}' declares modifier {} more than once",
                            block.name(),
                            modifier.selector()
                        ),
                    )
                    .in_section(block.section()),
                );
            } else {
                seen.push(modifier.selector());
            }
        }
    }

    result
}
