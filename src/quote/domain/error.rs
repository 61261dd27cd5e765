//! Quote validation errors.

use thiserror::Error;

/// Errors returned while constructing quote values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuoteDomainError {
    /// The quote text is empty after trimming.
    #[error("quote text must not be empty")]
    EmptyText,

    /// The quote text exceeds the length limit.
    #[error("quote text exceeds {max} characters")]
    TextTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The author name exceeds the length limit.
    #[error("author name exceeds {max} characters")]
    AuthorTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },
}
