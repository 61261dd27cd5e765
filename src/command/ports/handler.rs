//! Command handler port.

use crate::command::domain::{Command, CommandResult};
use async_trait::async_trait;

/// Business logic for exactly one command name.
///
/// Handlers narrow the command's metadata themselves and convert every
/// domain-service failure into [`CommandResult::Failed`]; they never
/// return an error channel of their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Executes the command.
    async fn handle(&self, command: &Command) -> CommandResult;

    /// One-line description shown in command listings.
    fn description(&self) -> &'static str {
        ""
    }
}
