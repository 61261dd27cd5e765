//! Provenance of a dare's content.

use super::ParseDareSourceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a dare's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DareSource {
    /// Produced by the external content generator.
    External,
    /// Served from local storage because the generator failed.
    DatabaseFallback,
    /// Written by a user.
    Manual,
}

impl DareSource {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::External => "external",
            Self::DatabaseFallback => "database_fallback",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for DareSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DareSource {
    type Error = ParseDareSourceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "external" => Ok(Self::External),
            "database_fallback" => Ok(Self::DatabaseFallback),
            "manual" => Ok(Self::Manual),
            _ => Err(ParseDareSourceError(value.to_owned())),
        }
    }
}
