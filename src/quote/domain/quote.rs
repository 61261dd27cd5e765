//! Quote entity.

use super::QuoteDomainError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_TEXT_LENGTH: usize = 1000;
const MAX_AUTHOR_LENGTH: usize = 100;
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Sequential identifier of a stored quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(u64);

impl QuoteId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated quote that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDraft {
    text: String,
    author: String,
    added_by: String,
    created_at: DateTime<Utc>,
}

impl QuoteDraft {
    /// Creates a draft. A missing or blank author becomes `"Unknown"`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteDomainError`] when the text is blank or either value
    /// is too long.
    pub fn new(
        text: impl Into<String>,
        author: Option<&str>,
        added_by: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, QuoteDomainError> {
        let trimmed = text.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(QuoteDomainError::EmptyText);
        }
        if trimmed.chars().count() > MAX_TEXT_LENGTH {
            return Err(QuoteDomainError::TextTooLong {
                max: MAX_TEXT_LENGTH,
            });
        }

        let attributed = author
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR);
        if attributed.chars().count() > MAX_AUTHOR_LENGTH {
            return Err(QuoteDomainError::AuthorTooLong {
                max: MAX_AUTHOR_LENGTH,
            });
        }

        Ok(Self {
            text: trimmed,
            author: attributed.to_owned(),
            added_by: added_by.into(),
            created_at: clock.utc(),
        })
    }

    /// Converts the draft into a stored quote.
    #[must_use]
    pub fn into_quote(self, id: QuoteId) -> Quote {
        Quote {
            id,
            text: self.text,
            author: self.author,
            added_by: self.added_by,
            created_at: self.created_at,
        }
    }
}

/// A stored quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    id: QuoteId,
    text: String,
    author: String,
    added_by: String,
    created_at: DateTime<Utc>,
}

impl Quote {
    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> QuoteId {
        self.id
    }

    /// Returns the quoted text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the attributed author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the user who saved the quote.
    #[must_use]
    pub fn added_by(&self) -> &str {
        &self.added_by
    }

    /// Returns when the quote was saved.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}
