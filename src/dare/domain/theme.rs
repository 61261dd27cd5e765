//! Validated dare theme.

use super::DareDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a theme name.
const MAX_THEME_LENGTH: usize = 50;

/// Theme a dare belongs to, e.g. `party` or `outdoor`.
///
/// Themes are trimmed and lowercased so that lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(String);

impl Theme {
    /// Creates a validated theme.
    ///
    /// # Errors
    ///
    /// Returns [`DareDomainError::EmptyTheme`] when blank or
    /// [`DareDomainError::InvalidTheme`] when longer than 50 characters or
    /// containing characters other than letters, digits, spaces, `-`, `_`.
    pub fn new(value: impl Into<String>) -> Result<Self, DareDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(DareDomainError::EmptyTheme);
        }

        let is_valid = normalized.chars().count() <= MAX_THEME_LENGTH
            && normalized
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'));
        if !is_valid {
            return Err(DareDomainError::InvalidTheme(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the theme as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Theme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
