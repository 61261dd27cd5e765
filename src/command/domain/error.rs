//! Error types for command construction and dispatch outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Errors returned while constructing a [`super::Command`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandDomainError {
    /// The command name is empty after trimming.
    #[error("command name must not be empty")]
    EmptyCommandName,

    /// The invoking user id is empty after trimming.
    #[error("command user id must not be empty")]
    EmptyUserId,
}

/// Category of a failed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandErrorKind {
    /// A required field was missing or malformed.
    Validation,
    /// A referenced entity does not exist.
    NotFound,
    /// The user may not run the command.
    PermissionDenied,
    /// The user exceeded the allowed request rate.
    RateLimited,
    /// An external service or persistence layer failed.
    Upstream,
    /// No handler is registered under the command name.
    UnknownCommand,
    /// A handler failed unexpectedly.
    Internal,
}

impl CommandErrorKind {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::PermissionDenied => "permission_denied",
            Self::RateLimited => "rate_limited",
            Self::Upstream => "upstream",
            Self::UnknownCommand => "unknown_command",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for CommandErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged error carried by a failed [`super::CommandResult`].
///
/// `message` is safe to show to the user; `cause` keeps the underlying
/// diagnostic text for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct CommandError {
    kind: CommandErrorKind,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    retry_after_secs: Option<u64>,
}

impl CommandError {
    /// Creates an error of the given kind.
    #[must_use]
    pub fn new(kind: CommandErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
            retry_after_secs: None,
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(CommandErrorKind::Validation, message)
    }

    /// Creates the canonical "`<field>` is required" validation error.
    #[must_use]
    pub fn required(field: &str) -> Self {
        Self::validation(format!("{field} is required"))
    }

    /// Creates a not-found error naming the entity and identifier,
    /// e.g. `Dare #7 not found`.
    #[must_use]
    pub fn not_found(entity: &str, id: impl fmt::Display) -> Self {
        Self::new(CommandErrorKind::NotFound, format!("{entity} #{id} not found"))
    }

    /// Creates a permission-denied error for a command.
    #[must_use]
    pub fn permission_denied(command: &str) -> Self {
        Self::new(
            CommandErrorKind::PermissionDenied,
            format!("You do not have permission to use {command}"),
        )
    }

    /// Creates a rate-limited error with an optional retry hint.
    ///
    /// The hint is rounded up to whole seconds, never below one.
    #[must_use]
    pub fn rate_limited(command: &str, retry_after: Option<Duration>) -> Self {
        let retry_after_secs = retry_after.map(ceil_secs);
        let message = match retry_after_secs {
            Some(secs) => format!("Rate limit exceeded for {command}, try again in {secs}s"),
            None => format!("Rate limit exceeded for {command}"),
        };
        Self {
            kind: CommandErrorKind::RateLimited,
            message,
            cause: None,
            retry_after_secs,
        }
    }

    /// Creates an upstream failure wrapping an infrastructure error.
    #[must_use]
    pub fn upstream(message: impl Into<String>, cause: &(dyn std::error::Error + 'static)) -> Self {
        Self::new(CommandErrorKind::Upstream, message).with_cause(cause.to_string())
    }

    /// Creates the unknown-command error.
    #[must_use]
    pub fn unknown_command(name: &str) -> Self {
        Self::new(
            CommandErrorKind::UnknownCommand,
            format!("unknown command: {name}"),
        )
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(CommandErrorKind::Internal, message)
    }

    /// Attaches diagnostic cause text.
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> CommandErrorKind {
        self.kind
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the diagnostic cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// Returns how long the user should wait before retrying.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_after_secs.map(Duration::from_secs)
    }
}

impl From<String> for CommandError {
    fn from(message: String) -> Self {
        Self::internal(message)
    }
}

impl From<&str> for CommandError {
    fn from(message: &str) -> Self {
        Self::internal(message)
    }
}

const fn ceil_secs(wait: Duration) -> u64 {
    let whole = wait.as_secs();
    let rounded = if wait.subsec_nanos() > 0 {
        whole.saturating_add(1)
    } else {
        whole
    };
    if rounded == 0 { 1 } else { rounded }
}
