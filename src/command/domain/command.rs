//! Command value type.

use super::{CommandDomainError, CommandError, MetadataValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Correlation identifier assigned to every command at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(Uuid);

impl CommandId {
    /// Creates a new random command identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for CommandId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One unit of work requested by a chat user.
///
/// Commands are immutable: the builder methods consume `self` and return a
/// new value, so middleware that enriches metadata never aliases the
/// caller's command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    id: CommandId,
    name: String,
    user_id: String,
    metadata: BTreeMap<String, Value>,
}

impl Command {
    /// Creates a command with empty metadata.
    ///
    /// The name is trimmed and lowercased; the user id is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDomainError::EmptyCommandName`] or
    /// [`CommandDomainError::EmptyUserId`] when either value is blank.
    pub fn new(
        name: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self, CommandDomainError> {
        let normalized_name = name.into().trim().to_ascii_lowercase();
        if normalized_name.is_empty() {
            return Err(CommandDomainError::EmptyCommandName);
        }

        let trimmed_user = user_id.into().trim().to_owned();
        if trimmed_user.is_empty() {
            return Err(CommandDomainError::EmptyUserId);
        }

        Ok(Self {
            id: CommandId::new(),
            name: normalized_name,
            user_id: trimmed_user,
            metadata: BTreeMap::new(),
        })
    }

    /// Returns a copy of the command with one metadata entry set.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns a copy of the command with every entry of `arguments` merged
    /// into its metadata. Existing keys are overwritten.
    #[must_use]
    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.metadata.extend(arguments);
        self
    }

    /// Returns the correlation identifier.
    #[must_use]
    pub const fn id(&self) -> CommandId {
        self.id
    }

    /// Returns the normalised command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the invoking user's identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the full metadata map.
    #[must_use]
    pub const fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    /// Looks up a metadata entry, treating JSON `null` as absent.
    #[must_use]
    pub fn argument(&self, key: &str) -> Option<MetadataValue<'_>> {
        self.metadata
            .get(key)
            .filter(|value| !value.is_null())
            .map(MetadataValue::new)
    }

    /// Narrows a required positive identifier argument.
    ///
    /// # Errors
    ///
    /// Returns a validation error `"<label> is required"` when the argument
    /// is absent, or `"<label> must be a positive integer"` when it cannot be
    /// read as one.
    pub fn required_id(&self, key: &str, label: &str) -> Result<u64, CommandError> {
        let value = self
            .argument(key)
            .ok_or_else(|| CommandError::required(label))?;
        value.as_id().ok_or_else(|| {
            CommandError::validation(format!("{label} must be a positive integer"))
        })
    }

    /// Narrows an optional positive count, such as a list limit.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `label` when the argument is present
    /// but is not a positive integer.
    pub fn optional_count(&self, key: &str, label: &str) -> Result<Option<usize>, CommandError> {
        self.argument(key)
            .map(|value| {
                value.as_count().ok_or_else(|| {
                    CommandError::validation(format!("{label} must be a positive integer"))
                })
            })
            .transpose()
    }

    /// Narrows an optional non-blank text argument.
    #[must_use]
    pub fn optional_text(&self, key: &str) -> Option<&str> {
        self.argument(key).and_then(MetadataValue::as_text)
    }
}
