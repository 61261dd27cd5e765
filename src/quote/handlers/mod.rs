//! Command handlers for quotes.

mod add;
mod delete;
mod get;
mod list;
mod random;

pub use add::AddQuoteHandler;
pub use delete::DeleteQuoteHandler;
pub use get::GetQuoteHandler;
pub use list::ListQuotesHandler;
pub use random::RandomQuoteHandler;

use crate::command::{
    domain::{Command, CommandError},
    services::{CommandRegistry, RegistryResult},
};
use crate::quote::{
    domain::{Quote, QuoteId},
    ports::QuoteRepository,
    services::{QuoteService, QuoteServiceError},
};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;

/// Command names served by this module.
pub mod names {
    /// Save a quote.
    pub const ADD: &str = "quote.add";
    /// Fetch a quote by `id`.
    pub const GET: &str = "quote.get";
    /// Delete a quote identified by `quote_id`.
    pub const DELETE: &str = "quote.delete";
    /// List saved quotes.
    pub const LIST: &str = "quote.list";
    /// Pick a random quote.
    pub const RANDOM: &str = "quote.random";
}

/// Registers every quote handler.
///
/// # Errors
///
/// Returns a registry error when any quote command name is already taken.
pub fn register<R, C>(
    registry: &mut CommandRegistry,
    quotes: &Arc<QuoteService<R, C>>,
) -> RegistryResult<()>
where
    R: QuoteRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    registry.register(names::ADD, Arc::new(AddQuoteHandler::new(Arc::clone(quotes))))?;
    registry.register(names::GET, Arc::new(GetQuoteHandler::new(Arc::clone(quotes))))?;
    registry.register(
        names::DELETE,
        Arc::new(DeleteQuoteHandler::new(Arc::clone(quotes))),
    )?;
    registry.register(
        names::LIST,
        Arc::new(ListQuotesHandler::new(Arc::clone(quotes))),
    )?;
    registry.register(
        names::RANDOM,
        Arc::new(RandomQuoteHandler::new(Arc::clone(quotes))),
    )?;
    Ok(())
}

fn required_quote_id(command: &Command, key: &str) -> Result<QuoteId, CommandError> {
    command.required_id(key, "Quote ID").map(QuoteId::new)
}

fn quote_json(quote: &Quote) -> Result<Value, CommandError> {
    serde_json::to_value(quote).map_err(|err| {
        CommandError::internal("Failed to encode quote").with_cause(err.to_string())
    })
}

fn service_failure(error: QuoteServiceError) -> CommandError {
    match error {
        QuoteServiceError::NotFound(id) => CommandError::not_found("Quote", id),
        QuoteServiceError::Domain(invalid) => {
            CommandError::validation(format!("Invalid quote: {invalid}"))
        }
        QuoteServiceError::Repository(err) => {
            CommandError::upstream("Quote storage is unavailable", &err)
        }
    }
}
