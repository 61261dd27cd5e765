//! `dare.random` handler.

use super::{dare_json, optional_theme, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandErrorKind, CommandResult},
    ports::CommandHandler,
};
use crate::dare::{ports::DareRepository, services::DareService};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Picks a random active dare, optionally within a `theme`.
pub struct RandomDareHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    dares: Arc<DareService<R, C>>,
}

impl<R, C> RandomDareHandler<R, C>
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
        let theme = optional_theme(command)?;
        let dare = self
            .dares
            .random(theme.as_ref())
            .await
            .map_err(service_failure)?
            .ok_or_else(|| CommandError::new(CommandErrorKind::NotFound, "No dares available"))?;
        Ok(CommandData::new(format!("Random dare #{}", dare.id()))
            .with_field("dare", dare_json(&dare)?))
    }
}

#[async_trait]
impl<R, C> CommandHandler for RandomDareHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, command: &Command) -> CommandResult {
        self.run(command).await.into()
    }

    fn description(&self) -> &'static str {
        "Pick a random dare"
    }
}
