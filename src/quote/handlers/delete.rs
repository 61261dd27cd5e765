//! `quote.delete` handler.

use super::{required_quote_id, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandResult},
    ports::CommandHandler,
};
use crate::quote::{ports::QuoteRepository, services::QuoteService};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Deletes the quote named by the `quote_id` argument.
pub struct DeleteQuoteHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    quotes: Arc<QuoteService<R, C>>,
}

impl<R, C> DeleteQuoteHandler<R, C>
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
        let id = required_quote_id(command, "quote_id")?;
        if !self.quotes.delete(id).await.map_err(service_failure)? {
            return Err(CommandError::not_found("Quote", id));
        }
        tracing::info!(quote_id = %id, user_id = command.user_id(), "quote deleted");
        Ok(CommandData::new(format!("Quote #{id} deleted successfully"))
            .with_field("quote_id", id.into_inner())
            .with_field("deleted", true))
    }
}

#[async_trait]
impl<R, C> CommandHandler for DeleteQuoteHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, command: &Command) -> CommandResult {
        self.run(command).await.into()
    }

    fn description(&self) -> &'static str {
        "Delete a saved quote"
    }
}
