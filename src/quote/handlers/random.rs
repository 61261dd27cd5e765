//! `quote.random` handler.

use super::{quote_json, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandErrorKind, CommandResult},
    ports::CommandHandler,
};
use crate::quote::{ports::QuoteRepository, services::QuoteService};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Picks a random saved quote.
pub struct RandomQuoteHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    quotes: Arc<QuoteService<R, C>>,
}

impl<R, C> RandomQuoteHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    /// Creates the handler.
    #[must_use]
    pub const fn new(quotes: Arc<QuoteService<R, C>>) -> Self {
        Self { quotes }
    }

    async fn run(&self) -> Result<CommandData, CommandError> {
        let quote = self
            .quotes
            .random()
            .await
            .map_err(service_failure)?
            .ok_or_else(|| CommandError::new(CommandErrorKind::NotFound, "No quotes available"))?;
        Ok(CommandData::new(quote.to_string()).with_field("quote", quote_json(&quote)?))
    }
}

#[async_trait]
impl<R, C> CommandHandler for RandomQuoteHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, _command: &Command) -> CommandResult {
        self.run().await.into()
    }

    fn description(&self) -> &'static str {
        "Show a random saved quote"
    }
}
