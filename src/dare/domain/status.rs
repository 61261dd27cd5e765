//! Dare lifecycle status.

use super::ParseDareStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a stored dare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DareStatus {
    /// The dare can be handed out.
    Active,
    /// Someone has completed the dare.
    Completed,
    /// The dare was retired and is no longer handed out.
    Archived,
}

impl DareStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for DareStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DareStatus {
    type Error = ParseDareStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "archived" => Ok(Self::Archived),
            _ => Err(ParseDareStatusError(value.to_owned())),
        }
    }
}
