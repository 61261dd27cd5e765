//! Name-to-handler lookup table.

use crate::command::ports::CommandHandler;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Maximum accepted length of a command name.
const MAX_NAME_LENGTH: usize = 64;

/// Result type for registry configuration.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Startup-time registry configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A handler is already registered under the name.
    #[error("duplicate command registration: {0}")]
    DuplicateCommand(String),

    /// The name is empty, too long, or contains characters outside
    /// `[a-z0-9_.-]`.
    #[error("invalid command name '{0}'")]
    InvalidName(String),
}

/// Maps command names to handlers.
///
/// The registry is populated once at startup and only read afterwards, so
/// it can be shared across concurrent dispatches without locking.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name` (normalised to lowercase).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCommand`] when the name is taken or
    /// [`RegistryError::InvalidName`] when it fails validation.
    pub fn register(
        &mut self,
        name: &str,
        handler: Arc<dyn CommandHandler>,
    ) -> RegistryResult<()> {
        let normalized = normalize_name(name)?;
        if self.handlers.contains_key(&normalized) {
            return Err(RegistryError::DuplicateCommand(normalized));
        }
        tracing::debug!(command = %normalized, "registered command handler");
        self.handlers.insert(normalized, handler);
        Ok(())
    }

    /// Builder-style variant of [`CommandRegistry::register`].
    ///
    /// # Errors
    ///
    /// Same as [`CommandRegistry::register`].
    pub fn with_handler(
        mut self,
        name: &str,
        handler: Arc<dyn CommandHandler>,
    ) -> RegistryResult<Self> {
        self.register(name, handler)?;
        Ok(self)
    }

    /// Returns the handler registered under `name`, if any.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers
            .get(name.trim().to_ascii_lowercase().as_str())
            .cloned()
    }

    /// Returns `true` when a handler is registered under `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.handlers
            .contains_key(name.trim().to_ascii_lowercase().as_str())
    }

    /// Returns all registered names in lexicographic order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns every `(name, handler)` pair sorted by name.
    #[must_use]
    pub fn all(&self) -> Vec<(&str, Arc<dyn CommandHandler>)> {
        let mut entries: Vec<_> = self
            .handlers
            .iter()
            .map(|(name, handler)| (name.as_str(), Arc::clone(handler)))
            .collect();
        entries.sort_unstable_by(|left, right| left.0.cmp(right.0));
        entries
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

fn normalize_name(name: &str) -> RegistryResult<String> {
    let normalized = name.trim().to_ascii_lowercase();
    let is_valid = !normalized.is_empty()
        && normalized.len() <= MAX_NAME_LENGTH
        && normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-'));
    if is_valid {
        Ok(normalized)
    } else {
        Err(RegistryError::InvalidName(name.to_owned()))
    }
}
