//! `quote.add` handler.

use super::{quote_json, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandResult},
    ports::CommandHandler,
};
use crate::quote::{
    ports::QuoteRepository,
    services::{AddQuoteRequest, QuoteService},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Saves the `text` argument, attributed to `author` or "Unknown".
pub struct AddQuoteHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    quotes: Arc<QuoteService<R, C>>,
}

impl<R, C> AddQuoteHandler<R, C>
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
        let text = command
            .optional_text("text")
            .ok_or_else(|| CommandError::required("Quote text"))?;
        let mut request = AddQuoteRequest::new(text, command.user_id());
        if let Some(author) = command.optional_text("author") {
            request = request.with_author(author);
        }

        let quote = self.quotes.add(request).await.map_err(service_failure)?;
        Ok(CommandData::new(format!("Quote #{} added", quote.id()))
            .with_field("quote", quote_json(&quote)?))
    }
}

#[async_trait]
impl<R, C> CommandHandler for AddQuoteHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, command: &Command) -> CommandResult {
        self.run(command).await.into()
    }

    fn description(&self) -> &'static str {
        "Save a quote"
    }
}
