//! Rate-limit middleware.

use super::Middleware;
use crate::command::domain::{Command, CommandError};
use crate::command::ports::RateLimitService;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

/// Rejects commands that exceed the user's budget.
///
/// Limiter backend failures let the command through with a warning.
pub struct RateLimitMiddleware<L>
where
    L: RateLimitService,
{
    limiter: Arc<L>,
    scope: Option<HashSet<String>>,
}

impl<L> RateLimitMiddleware<L>
where
    L: RateLimitService,
{
    /// Creates a rate-limit step backed by `limiter` that counts every
    /// command name.
    #[must_use]
    pub const fn new(limiter: Arc<L>) -> Self {
        Self {
            limiter,
            scope: None,
        }
    }

    /// Restricts accounting to `commands`. Other names pass through
    /// uncounted, so unknown commands cannot grow the limiter's state.
    #[must_use]
    pub fn scoped_to<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = Some(commands.into_iter().map(Into::into).collect());
        self
    }

    fn counts(&self, command_name: &str) -> bool {
        self.scope
            .as_ref()
            .is_none_or(|names| names.contains(command_name))
    }
}

#[async_trait]
impl<L> Middleware for RateLimitMiddleware<L>
where
    L: RateLimitService + 'static,
{
    fn name(&self) -> &'static str {
        "rate_limit"
    }

    async fn process(&self, command: Command) -> Result<Command, CommandError> {
        if !self.counts(command.name()) {
            return Ok(command);
        }
        match self
            .limiter
            .check_limit(command.user_id(), command.name())
            .await
        {
            Ok(decision) if decision.allowed => Ok(command),
            Ok(decision) => {
                tracing::info!(
                    user_id = command.user_id(),
                    command = command.name(),
                    retry_after_secs = decision.retry_after.map(|wait| wait.as_secs()),
                    "rate limit exceeded"
                );
                Err(CommandError::rate_limited(
                    command.name(),
                    decision.retry_after,
                ))
            }
            Err(error) => {
                tracing::warn!(
                    user_id = command.user_id(),
                    command = command.name(),
                    %error,
                    "rate-limit check failed, allowing"
                );
                Ok(command)
            }
        }
    }
}
