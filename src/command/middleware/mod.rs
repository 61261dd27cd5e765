//! Ordered pre-processing of commands before they reach a handler.
//!
//! Each middleware either passes the command on (possibly as a new,
//! enriched value) or rejects it with a [`CommandError`]. A rejection is
//! terminal: later middleware and the handler never run.

mod authorization;
mod rate_limit;

pub use authorization::AuthorizationMiddleware;
pub use rate_limit::RateLimitMiddleware;

use crate::command::domain::{Command, CommandError};
use async_trait::async_trait;
use std::sync::Arc;

/// One pre-processing step in the dispatch pipeline.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Passes the command through, returns a transformed command, or
    /// rejects it.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] to abort dispatch.
    async fn process(&self, command: Command) -> Result<Command, CommandError>;
}

/// Middleware executed strictly in registration order.
#[derive(Clone, Default)]
pub struct MiddlewareChain {
    steps: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a middleware to the end of the chain.
    #[must_use]
    pub fn with(mut self, middleware: impl Middleware + 'static) -> Self {
        self.steps.push(Arc::new(middleware));
        self
    }

    /// Appends a shared middleware to the end of the chain.
    #[must_use]
    pub fn with_shared(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.steps.push(middleware);
        self
    }

    /// Returns the middleware names in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Returns the number of middleware in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` when the chain has no middleware.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs the command through every middleware in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejection; no later middleware runs after it.
    pub async fn run(&self, command: Command) -> Result<Command, CommandError> {
        let mut current = command;
        for step in &self.steps {
            current = step.process(current).await.inspect_err(|error| {
                tracing::debug!(
                    middleware = step.name(),
                    kind = %error.kind(),
                    "middleware rejected command"
                );
            })?;
        }
        Ok(current)
    }
}
