//! Dispatch orchestration: middleware, registry lookup, handler execution.

use crate::command::{
    domain::{Command, CommandError, CommandResult},
    middleware::MiddlewareChain,
    services::CommandRegistry,
};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::Instrument;

/// Routes commands through the middleware chain to their handler.
///
/// [`Dispatcher::dispatch`] never panics or returns an error: every failure
/// is converted into [`CommandResult::Failed`]. No retries happen at this
/// level.
#[derive(Clone)]
pub struct Dispatcher {
    middleware: MiddlewareChain,
    registry: CommandRegistry,
}

impl Dispatcher {
    /// Creates a dispatcher from an ordered middleware chain and a populated
    /// registry.
    #[must_use]
    pub const fn new(middleware: MiddlewareChain, registry: CommandRegistry) -> Self {
        Self {
            middleware,
            registry,
        }
    }

    /// Returns the registry used for lookups.
    #[must_use]
    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Returns the middleware chain.
    #[must_use]
    pub const fn middleware(&self) -> &MiddlewareChain {
        &self.middleware
    }

    /// Dispatches one command and returns its outcome.
    pub async fn dispatch(&self, command: Command) -> CommandResult {
        let span = tracing::info_span!(
            "dispatch",
            command_id = %command.id(),
            command = command.name(),
            user_id = command.user_id(),
        );
        async move {
            let result = self.run(command).await;
            match &result {
                CommandResult::Ok(_) => tracing::info!("command succeeded"),
                CommandResult::Failed(error) => tracing::warn!(
                    kind = %error.kind(),
                    error = error.message(),
                    cause = error.cause(),
                    "command failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run(&self, command: Command) -> CommandResult {
        let name = command.name().to_owned();
        match AssertUnwindSafe(self.pipeline(command)).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => {
                let detail = panic_detail(payload.as_ref());
                tracing::error!(panic = %detail, "command pipeline panicked");
                CommandResult::fail(
                    CommandError::internal(format!(
                        "An unexpected error occurred while running {name}"
                    ))
                    .with_cause(detail),
                )
            }
        }
    }

    /// Middleware, lookup and handler. Panics anywhere in here are caught by
    /// [`Dispatcher::run`].
    async fn pipeline(&self, command: Command) -> CommandResult {
        let accepted = match self.middleware.run(command).await {
            Ok(accepted) => accepted,
            Err(rejection) => return CommandResult::fail(rejection),
        };

        let Some(handler) = self.registry.resolve(accepted.name()) else {
            return CommandResult::fail(CommandError::unknown_command(accepted.name()));
        };

        handler.handle(&accepted).await
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|text| (*text).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "command pipeline panicked".to_owned())
}
