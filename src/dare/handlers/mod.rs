//! Command handlers for dares.
//!
//! Each handler narrows the command metadata it needs, calls
//! [`DareService`] or [`ContentAcquisition`], and reports the outcome as a
//! [`crate::command::domain::CommandResult`].

mod complete;
mod create;
mod delete;
mod get;
mod list;
mod random;
mod update;

pub use complete::CompleteDareHandler;
pub use create::CreateDareHandler;
pub use delete::DeleteDareHandler;
pub use get::GetDareHandler;
pub use list::ListDaresHandler;
pub use random::RandomDareHandler;
pub use update::UpdateDareHandler;

use crate::command::{
    domain::{Command, CommandError},
    services::{CommandRegistry, RegistryResult},
};
use crate::dare::{
    domain::{Dare, DareId, DareStatus, Theme},
    ports::{ContentGenerator, DareRepository},
    services::{ContentAcquisition, DareService, DareServiceError},
};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;

/// Command names served by this module.
pub mod names {
    /// Create a dare (generated, or manual with `content`).
    pub const CREATE: &str = "dare.create";
    /// Fetch a dare by `id`.
    pub const GET: &str = "dare.get";
    /// Update fields of a dare identified by `dare_id`.
    pub const UPDATE: &str = "dare.update";
    /// Delete a dare identified by `dare_id`.
    pub const DELETE: &str = "dare.delete";
    /// Mark a dare identified by `dare_id` as completed.
    pub const COMPLETE: &str = "dare.complete";
    /// List stored dares.
    pub const LIST: &str = "dare.list";
    /// Pick a random active dare.
    pub const RANDOM: &str = "dare.random";
}

/// Defaults applied when a command omits theme or generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DareDefaults {
    /// Theme used when none is given.
    pub theme: Theme,
    /// Generator used when none is given.
    pub generator: String,
}

/// Registers every dare handler.
///
/// # Errors
///
/// Returns a registry error when any dare command name is already taken.
pub fn register<R, G, C>(
    registry: &mut CommandRegistry,
    dares: &Arc<DareService<R, C>>,
    acquisition: ContentAcquisition<R, G, C>,
    defaults: DareDefaults,
) -> RegistryResult<()>
where
    R: DareRepository + 'static,
    G: ContentGenerator + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    registry.register(
        names::CREATE,
        Arc::new(CreateDareHandler::new(
            Arc::clone(dares),
            acquisition,
            defaults,
        )),
    )?;
    registry.register(names::GET, Arc::new(GetDareHandler::new(Arc::clone(dares))))?;
    registry.register(
        names::UPDATE,
        Arc::new(UpdateDareHandler::new(Arc::clone(dares))),
    )?;
    registry.register(
        names::DELETE,
        Arc::new(DeleteDareHandler::new(Arc::clone(dares))),
    )?;
    registry.register(
        names::COMPLETE,
        Arc::new(CompleteDareHandler::new(Arc::clone(dares))),
    )?;
    registry.register(names::LIST, Arc::new(ListDaresHandler::new(Arc::clone(dares))))?;
    registry.register(
        names::RANDOM,
        Arc::new(RandomDareHandler::new(Arc::clone(dares))),
    )?;
    Ok(())
}

fn required_dare_id(command: &Command, key: &str) -> Result<DareId, CommandError> {
    command.required_id(key, "Dare ID").map(DareId::new)
}

fn optional_theme(command: &Command) -> Result<Option<Theme>, CommandError> {
    command
        .optional_text("theme")
        .map(|raw| {
            Theme::new(raw)
                .map_err(|invalid| CommandError::validation(format!("Invalid theme: {invalid}")))
        })
        .transpose()
}

fn optional_status(command: &Command) -> Result<Option<DareStatus>, CommandError> {
    command
        .optional_text("status")
        .map(|raw| {
            DareStatus::try_from(raw).map_err(|_| {
                CommandError::validation(format!(
                    "Invalid status '{raw}', expected active, completed or archived"
                ))
            })
        })
        .transpose()
}

fn dare_json(dare: &Dare) -> Result<Value, CommandError> {
    serde_json::to_value(dare).map_err(|err| {
        CommandError::internal("Failed to encode dare").with_cause(err.to_string())
    })
}

fn service_failure(error: DareServiceError) -> CommandError {
    match error {
        DareServiceError::NotFound(id) => CommandError::not_found("Dare", id),
        DareServiceError::EmptyUpdate => CommandError::validation("No update fields provided"),
        DareServiceError::Domain(invalid) => {
            CommandError::validation(format!("Invalid dare: {invalid}"))
        }
        DareServiceError::Repository(err) => {
            CommandError::upstream("Dare storage is unavailable", &err)
        }
    }
}
