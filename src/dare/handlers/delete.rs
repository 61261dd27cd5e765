//! `dare.delete` handler.

use super::{required_dare_id, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandResult},
    ports::CommandHandler,
};
use crate::dare::{ports::DareRepository, services::DareService};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Deletes the dare named by the `dare_id` argument.
pub struct DeleteDareHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    dares: Arc<DareService<R, C>>,
}

impl<R, C> DeleteDareHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    /// Creates the handler.
    #[must_use]
    pub const fn new(dares: Arc<DareService<R, C>>) -> Self {
        Self { dares }
    }

    async fn run(&self, command: &Command) -> Result<CommandData, CommandError> {
        let id = required_dare_id(command, "dare_id")?;
        if !self.dares.delete(id).await.map_err(service_failure)? {
            return Err(CommandError::not_found("Dare", id));
        }
        tracing::info!(dare_id = %id, user_id = command.user_id(), "dare deleted");
        Ok(CommandData::new(format!("Dare #{id} deleted successfully"))
            .with_field("dare_id", id.into_inner())
            .with_field("deleted", true))
    }
}

#[async_trait]
impl<R, C> CommandHandler for DeleteDareHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, command: &Command) -> CommandResult {
        self.run(command).await.into()
    }

    fn description(&self) -> &'static str {
        "Delete a dare"
    }
}
