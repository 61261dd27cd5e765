//! Composition root.
//!
//! [`BotBuilder`] turns a [`BotConfig`] into a ready [`Bot`]: in-memory
//! stores, the `[authorization, rate_limit]` middleware chain and every dare
//! and quote handler registered with one [`Dispatcher`].

use std::sync::Arc;

use mockable::DefaultClock;
use thiserror::Error;

use crate::command::{
    adapters::memory::{FixedWindowRateLimiter, InMemoryPermissionService},
    domain::{Command, CommandResult},
    middleware::{AuthorizationMiddleware, MiddlewareChain, RateLimitMiddleware},
    services::{CommandRegistry, Dispatcher, RegistryError},
};
use crate::config::BotConfig;
use crate::dare::{
    self,
    adapters::{
        http::HttpContentGenerator,
        memory::{InMemoryDareRepository, ScriptedContentGenerator},
    },
    domain::{DareDomainError, Theme},
    handlers::DareDefaults,
    ports::{ContentGenerator, ContentGeneratorError},
    services::{AcquisitionPolicy, ContentAcquisition, DareService},
};
use crate::quote::{self, adapters::memory::InMemoryQuoteRepository, services::QuoteService};

/// Dare service type wired by the bot.
pub type BotDareService = DareService<InMemoryDareRepository, DefaultClock>;
/// Quote service type wired by the bot.
pub type BotQuoteService = QuoteService<InMemoryQuoteRepository, DefaultClock>;

/// Errors that stop the bot from starting.
#[derive(Debug, Error)]
pub enum BotError {
    /// Two handlers claimed the same name, or a name is malformed.
    #[error("command registration failed: {0}")]
    Registry(#[from] RegistryError),

    /// `generator.default_theme` is not a valid theme.
    #[error("invalid default theme: {0}")]
    DefaultTheme(#[from] DareDomainError),

    /// The HTTP generator client could not be built.
    #[error("content generator setup failed: {0}")]
    Generator(#[from] ContentGeneratorError),
}

/// Builds a [`Bot`] from configuration.
pub struct BotBuilder {
    config: BotConfig,
    generator: Option<Arc<dyn ContentGenerator>>,
}

impl BotBuilder {
    /// Starts from `config`.
    #[must_use]
    pub const fn new(config: BotConfig) -> Self {
        Self {
            config,
            generator: None,
        }
    }

    /// Uses `generator` instead of the one derived from configuration.
    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn ContentGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Wires services, middleware and handlers.
    ///
    /// Without an explicit generator, `generator.base_url` selects the HTTP
    /// client; when it is unset the bot runs offline and every creation
    /// request is served from stored dares.
    ///
    /// # Errors
    ///
    /// Returns [`BotError`] when the default theme is invalid, the HTTP
    /// client cannot be built or handler registration fails.
    pub fn build(self) -> Result<Bot, BotError> {
        let Self {
            config,
            generator: explicit_generator,
        } = self;
        let clock = Arc::new(DefaultClock);

        let generator = match explicit_generator {
            Some(explicit) => explicit,
            None => configured_generator(&config)?,
        };
        let defaults = DareDefaults {
            theme: Theme::new(config.generator.default_theme.as_str())?,
            generator: config.generator.default_generator.clone(),
        };
        let policy = AcquisitionPolicy {
            attempts: config.generator.attempts,
            timeout: config.generator.timeout(),
            retry_delay: config.generator.retry_delay(),
        };

        let dares = Arc::new(DareService::new(
            Arc::new(InMemoryDareRepository::new()),
            Arc::clone(&clock),
        ));
        let quotes = Arc::new(QuoteService::new(
            Arc::new(InMemoryQuoteRepository::new()),
            Arc::clone(&clock),
        ));
        let acquisition = ContentAcquisition::new(Arc::clone(&dares), generator, policy);

        let mut registry = CommandRegistry::new();
        dare::handlers::register(&mut registry, &dares, acquisition, defaults)?;
        quote::handlers::register(&mut registry, &quotes)?;

        let permissions = Arc::new(InMemoryPermissionService::with_rules(
            config.permissions.admins.iter().cloned(),
            config.permissions.restricted_commands.iter().cloned(),
        ));
        let limiter = Arc::new(FixedWindowRateLimiter::new(
            config.rate_limit.max_requests,
            config.rate_limit.window(),
            clock,
        ));
        let middleware = MiddlewareChain::new()
            .with(AuthorizationMiddleware::new(Arc::clone(&permissions)))
            .with(RateLimitMiddleware::new(limiter).scoped_to(registry.names()));

        tracing::info!(
            commands = registry.len(),
            middleware = ?middleware.names(),
            online = config.generator.base_url.is_some(),
            "bot ready"
        );

        Ok(Bot {
            dispatcher: Dispatcher::new(middleware, registry),
            permissions,
            dares,
            quotes,
        })
    }
}

fn configured_generator(config: &BotConfig) -> Result<Arc<dyn ContentGenerator>, BotError> {
    let settings = &config.generator;
    match settings.base_url.as_deref() {
        Some(base_url) => {
            let client =
                HttpContentGenerator::new(base_url, settings.api_key.clone(), settings.timeout())?;
            tracing::info!(endpoint = client.endpoint(), "using HTTP content generator");
            Ok(Arc::new(client))
        }
        None => {
            tracing::warn!("no generator configured; serving stored dares only");
            Ok(Arc::new(ScriptedContentGenerator::new()))
        }
    }
}

/// A fully wired bot.
pub struct Bot {
    dispatcher: Dispatcher,
    permissions: Arc<InMemoryPermissionService>,
    dares: Arc<BotDareService>,
    quotes: Arc<BotQuoteService>,
}

impl Bot {
    /// Builds a bot from `config` with the configured generator.
    ///
    /// # Errors
    ///
    /// See [`BotBuilder::build`].
    pub fn from_config(config: BotConfig) -> Result<Self, BotError> {
        BotBuilder::new(config).build()
    }

    /// Dispatches one command through middleware and its handler.
    pub async fn dispatch(&self, command: Command) -> CommandResult {
        self.dispatcher.dispatch(command).await
    }

    /// Returns the dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Returns the permission table, e.g. to block a user at runtime.
    #[must_use]
    pub const fn permissions(&self) -> &Arc<InMemoryPermissionService> {
        &self.permissions
    }

    /// Returns the dare service.
    #[must_use]
    pub const fn dares(&self) -> &Arc<BotDareService> {
        &self.dares
    }

    /// Returns the quote service.
    #[must_use]
    pub const fn quotes(&self) -> &Arc<BotQuoteService> {
        &self.quotes
    }
}
