//! `dare.list` handler.

use super::{dare_json, optional_status, optional_theme, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandErrorKind, CommandResult},
    ports::CommandHandler,
};
use crate::dare::{domain::DareFilter, ports::DareRepository, services::DareService};
use async_trait::async_trait;
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;

/// Number of dares returned when no `limit` is given.
const DEFAULT_LIMIT: usize = 10;
/// Upper bound on `limit`.
const MAX_LIMIT: usize = 25;

/// Lists stored dares filtered by optional `theme`, `status` and `limit`.
///
/// An empty listing is reported as a failure.
pub struct ListDaresHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    dares: Arc<DareService<R, C>>,
}

impl<R, C> ListDaresHandler<R, C>
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
        let limit = command
            .optional_count("limit", "Limit")?
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let filter = DareFilter {
            theme: optional_theme(command)?,
            status: optional_status(command)?,
            limit: Some(limit),
        };

        let dares = self.dares.list(&filter).await.map_err(service_failure)?;
        if dares.is_empty() {
            return Err(CommandError::new(
                CommandErrorKind::NotFound,
                "No dares available",
            ));
        }

        let count = dares.len();
        let encoded = dares
            .iter()
            .map(dare_json)
            .collect::<Result<Vec<Value>, _>>()?;
        let noun = if count == 1 { "dare" } else { "dares" };
        Ok(CommandData::new(format!("Found {count} {noun}"))
            .with_field("dares", encoded)
            .with_field("count", count))
    }
}

#[async_trait]
impl<R, C> CommandHandler for ListDaresHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, command: &Command) -> CommandResult {
        self.run(command).await.into()
    }

    fn description(&self) -> &'static str {
        "List stored dares"
    }
}
