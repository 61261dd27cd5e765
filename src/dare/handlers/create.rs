//! `dare.create` handler.

use super::{DareDefaults, dare_json, optional_theme, service_failure};
use crate::command::{
    domain::{Command, CommandData, CommandError, CommandResult},
    ports::CommandHandler,
};
use crate::dare::{
    domain::DareSource,
    ports::{ContentGenerator, DareRepository},
    services::{
        AcquireDareRequest, AcquisitionError, ContentAcquisition, CreateDareRequest, DareService,
    },
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Creates a dare.
///
/// With a `content` argument the text is stored as a manual dare.
/// Otherwise the content is requested from the external generator for the
/// given `theme` and `generator`, falling back to a stored dare when the
/// generator fails.
pub struct CreateDareHandler<R, G, C>
where
    R: DareRepository,
    G: ContentGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    dares: Arc<DareService<R, C>>,
    acquisition: ContentAcquisition<R, G, C>,
    defaults: DareDefaults,
}

impl<R, G, C> CreateDareHandler<R, G, C>
where
    R: DareRepository,
    G: ContentGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates the handler.
    #[must_use]
    pub const fn new(
        dares: Arc<DareService<R, C>>,
        acquisition: ContentAcquisition<R, G, C>,
        defaults: DareDefaults,
    ) -> Self {
        Self {
            dares,
            acquisition,
            defaults,
        }
    }

    async fn run(&self, command: &Command) -> Result<CommandData, CommandError> {
        let theme = optional_theme(command)?.unwrap_or_else(|| self.defaults.theme.clone());

        if let Some(content) = command.optional_text("content") {
            let request = CreateDareRequest::new(content, theme, DareSource::Manual)
                .with_created_by(command.user_id());
            let dare = self.dares.create(request).await.map_err(service_failure)?;
            return Ok(CommandData::new(format!("Dare #{} created", dare.id()))
                .with_field("dare", dare_json(&dare)?)
                .with_field("source", DareSource::Manual.as_str())
                .with_field("fallback", false));
        }

        let generator = command
            .optional_text("generator")
            .map_or_else(|| self.defaults.generator.clone(), str::to_owned);
        let request = AcquireDareRequest {
            theme,
            generator,
            requested_by: Some(command.user_id().to_owned()),
        };

        let acquired = self
            .acquisition
            .acquire(request)
            .await
            .map_err(|error| acquisition_failure(&error))?;

        let id = acquired.dare.id();
        let message = if acquired.origin.is_fallback() {
            format!("Dare generator is unavailable, serving stored Dare #{id}")
        } else {
            format!("Dare #{id} created")
        };
        Ok(CommandData::new(message)
            .with_field("dare", dare_json(&acquired.dare)?)
            .with_field("source", acquired.origin.source().as_str())
            .with_field("fallback", acquired.origin.is_fallback()))
    }
}

fn acquisition_failure(error: &AcquisitionError) -> CommandError {
    match error {
        AcquisitionError::NoFallback { .. } | AcquisitionError::FallbackFailed { .. } => {
            CommandError::upstream("No dare could be created right now, try again later", error)
        }
        AcquisitionError::Persistence(_) => {
            CommandError::upstream("Failed to save the generated dare", error)
        }
    }
}

#[async_trait]
impl<R, G, C> CommandHandler for CreateDareHandler<R, G, C>
where
    R: DareRepository,
    G: ContentGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    async fn handle(&self, command: &Command) -> CommandResult {
        self.run(command).await.into()
    }

    fn description(&self) -> &'static str {
        "Create a dare, generated for a theme or written by hand"
    }
}
