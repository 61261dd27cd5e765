//! Error types for dare domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing dare domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DareDomainError {
    /// The dare content is empty after trimming.
    #[error("dare content must not be empty")]
    EmptyContent,

    /// The dare content exceeds the length limit.
    #[error("dare content exceeds {max} characters")]
    ContentTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The theme is empty after trimming.
    #[error("theme must not be empty")]
    EmptyTheme,

    /// The theme is too long or contains unsupported characters.
    #[error("invalid theme '{0}'")]
    InvalidTheme(String),
}

/// Error returned while parsing dare status values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown dare status: {0}")]
pub struct ParseDareStatusError(pub String);

/// Error returned while parsing dare source values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown dare source: {0}")]
pub struct ParseDareSourceError(pub String);
