//! Identifier types for the dare domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential identifier of a stored dare, shown to users as `#<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DareId(u64);

impl DareId {
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

impl From<u64> for DareId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for DareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
