//! Error types for template resolution and configuration loading

use thiserror::Error;

/// Errors raised while parsing a label template
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` was never closed
    #[error("unclosed placeholder starting at offset {0}")]
    UnclosedPlaceholder(usize),

    /// Placeholder content is not an argument index
    #[error("invalid argument index {index:?} at offset {offset}")]
    InvalidArgumentIndex {
        /// Raw placeholder content
        index: String,
        /// Byte offset of the opening brace
        offset: usize,
    },

    /// Argument index above [`MAX_ARGUMENT_INDEX`](crate::MAX_ARGUMENT_INDEX)
    #[error("argument index {index} at offset {offset} exceeds the maximum")]
    ArgumentIndexTooLarge {
        /// Parsed index
        index: usize,
        /// Byte offset of the opening brace
        offset: usize,
    },

    /// A quoted section ran to the end of the template
    #[error("unterminated quote starting at offset {0}")]
    UnterminatedQuote(usize),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors raised while loading a distribution configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Grouping separator is not a single character
    #[error("grouping separator must be a single character, got {0:?}")]
    InvalidGroupingSeparator(String),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// No built-in template bundle for the locale
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// A configured template failed to parse
    #[error("template `{name}`: {source}")]
    Template {
        /// Template name (satisfied, tolerated, untolerated, failed)
        name: &'static str,
        /// Parse failure
        #[source]
        source: TemplateError,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
