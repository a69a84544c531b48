use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for styleguide operations
#[derive(Error, Diagnostic, Debug)]
pub enum StyleguideError {
    #[error("IO error: {0}")]
    #[diagnostic(code(styleguide::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(styleguide::io))]
    Io { path: PathBuf, message: String },

    #[error("'{line}' is not a valid modifier line")]
    #[diagnostic(
        code(styleguide::parse::modifier),
        help("Modifiers are written as `.selector - Description` or `:pseudo - Description`")
    )]
    MalformedModifier { line: String },

    #[error("Malformed block: {message}")]
    #[diagnostic(code(styleguide::parse::block))]
    MalformedBlock {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Malformed section '{section}': '{segment}' is not a number")]
    #[diagnostic(
        code(styleguide::parse::section),
        help("Sections are dotted numbers such as `1.2` or `10.3.1`")
    )]
    MalformedSection { section: String, segment: String },

    #[error("Failed to load {}", path.display())]
    #[diagnostic(code(styleguide::load))]
    Load {
        path: PathBuf,
        #[source]
        source: Box<StyleguideError>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(styleguide::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(styleguide::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(styleguide::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(styleguide::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl StyleguideError {
    /// Shorthand for a block-level parse failure.
    pub fn malformed_block(message: impl Into<String>, help: Option<&str>) -> Self {
        StyleguideError::MalformedBlock {
            message: message.into(),
            help: help.map(str::to_string),
        }
    }
}

pub type Result<T> = std::result::Result<T, StyleguideError>;
