//! `quote.list` handler.

use super::{quote_json, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandResult},
    ports::CommandHandler,
};
use crate::quote::{ports::QuoteRepository, services::QuoteService};
use async_trait::async_trait;
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 25;

/// Lists saved quotes, up to `limit`.
///
/// Unlike `dare.list`, an empty listing succeeds with an empty payload.
pub struct ListQuotesHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    quotes: Arc<QuoteService<R, C>>,
}

impl<R, C> ListQuotesHandler<R, C>
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
        let limit = command
            .optional_count("limit", "Limit")?
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let quotes = self
            .quotes
            .list(Some(limit))
            .await
            .map_err(service_failure)?;

        let count = quotes.len();
        let message = match count {
            0 => "No quotes saved yet".to_owned(),
            1 => "Found 1 quote".to_owned(),
            n => format!("Found {n} quotes"),
        };
        let encoded = quotes
            .iter()
            .map(quote_json)
            .collect::<Result<Vec<Value>, _>>()?;
        Ok(CommandData::new(message)
            .with_field("quotes", encoded)
            .with_field("count", count))
    }
}

#[async_trait]
impl<R, C> CommandHandler for ListQuotesHandler<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, command: &Command) -> CommandResult {
        self.run(command).await.into()
    }

    fn description(&self) -> &'static str {
        "List saved quotes"
    }
}
