//! Handler-local narrowing of free-form command metadata.

use serde_json::Value;

/// Borrowed view of one metadata entry with lenient typed accessors.
///
/// Chat platforms deliver options as strings or numbers depending on the
/// adapter, so the accessors accept both encodings where it is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetadataValue<'a>(&'a Value);

impl<'a> MetadataValue<'a> {
    pub(super) const fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// Returns the raw JSON value.
    #[must_use]
    pub const fn raw(self) -> &'a Value {
        self.0
    }

    /// Interprets the value as a positive integer identifier.
    ///
    /// Accepts JSON numbers and numeric strings (optionally prefixed with
    /// `#`). Returns `None` for zero, negatives and non-numeric input.
    #[must_use]
    pub fn as_id(self) -> Option<u64> {
        let parsed = match self.0 {
            Value::Number(number) => number.as_u64(),
            Value::String(text) => text.trim().trim_start_matches('#').parse::<u64>().ok(),
            _ => None,
        };
        parsed.filter(|id| *id > 0)
    }

    /// Interprets the value as non-blank text.
    #[must_use]
    pub fn as_text(self) -> Option<&'a str> {
        self.0
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Interprets the value as a positive count, used for list limits.
    #[must_use]
    pub fn as_count(self) -> Option<usize> {
        self.as_id().and_then(|count| usize::try_from(count).ok())
    }
}
