//! `dare.complete` handler.

use super::{dare_json, required_dare_id, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandResult},
    ports::CommandHandler,
};
use crate::dare::{ports::DareRepository, services::DareService};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Marks the dare named by the `dare_id` argument as completed.
pub struct CompleteDareHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    dares: Arc<DareService<R, C>>,
}

impl<R, C> CompleteDareHandler<R, C>
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
        let dare = self.dares.complete(id).await.map_err(service_failure)?;
        Ok(CommandData::new(format!("Dare #{id} marked as completed"))
            .with_field("dare", dare_json(&dare)?))
    }
}

#[async_trait]
impl<R, C> CommandHandler for CompleteDareHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, command: &Command) -> CommandResult {
        self.run(command).await.into()
    }

    fn description(&self) -> &'static str {
        "Mark a dare as completed"
    }
}
