//! `quote.get` handler.

use super::{quote_json, required_quote_id, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandResult},
    ports::CommandHandler,
};
use crate::quote::{ports::QuoteRepository, services::QuoteService};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Fetches the quote named by the `id` argument.
pub struct GetQuoteHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    quotes: Arc<QuoteService<R, C>>,
}

impl<R, C> GetQuoteHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    /// Creates the handler.
    #[must_use]
    pub const fn new(quotes: Arc<QuoteService<R, C>>) -> Self {
        Self { quotes }
    }

    async fn run(&self, command: &Command) -> Result<CommandData, CommandError> {
        let id = required_quote_id(command, "id")?;
        let quote = self.quotes.get(id).await.map_err(service_failure)?;
        Ok(CommandData::new(quote.to_string()).with_field("quote", quote_json(&quote)?))
    }
}

#[async_trait]
impl<R, C> CommandHandler for GetQuoteHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, command: &Command) -> CommandResult {
        self.run(command).await.into()
    }

    fn description(&self) -> &'static str {
        "Show a saved quote"
    }
}
