//! `dare.update` handler.

use super::{dare_json, optional_status, optional_theme, required_dare_id, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandResult},
    ports::CommandHandler,
};
use crate::dare::{domain::DareUpdate, ports::DareRepository, services::DareService};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Updates `content`, `theme` and/or `status` of the dare named by
/// `dare_id`.
pub struct UpdateDareHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    dares: Arc<DareService<R, C>>,
}

impl<R, C> UpdateDareHandler<R, C>
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
        let (update, fields) = build_update(command)?;
        if update.is_empty() {
            return Err(CommandError::validation("No update fields provided"));
        }

        let dare = self.dares.update(id, update).await.map_err(service_failure)?;
        Ok(CommandData::new(format!("Dare #{id} updated successfully"))
            .with_field("dare", dare_json(&dare)?)
            .with_field("updated_fields", fields))
    }
}

fn build_update(command: &Command) -> Result<(DareUpdate, Vec<&'static str>), CommandError> {
    let mut update = DareUpdate::new();
    let mut fields = Vec::new();

    if let Some(content) = command.optional_text("content") {
        update = update
            .with_content(content)
            .map_err(|invalid| CommandError::validation(format!("Invalid dare: {invalid}")))?;
        fields.push("content");
    }
    if let Some(theme) = optional_theme(command)? {
        update = update.with_theme(theme);
        fields.push("theme");
    }
    if let Some(status) = optional_status(command)? {
        update = update.with_status(status);
        fields.push("status");
    }
    Ok((update, fields))
}

#[async_trait]
impl<R, C> CommandHandler for UpdateDareHandler<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, command: &Command) -> CommandResult {
        self.run(command).await.into()
    }

    fn description(&self) -> &'static str {
        "Edit a dare's content, theme or status"
    }
}
