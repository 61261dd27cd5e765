//! Darebot: command dispatch core for a dare and quote chat bot.
//!
//! Chat front ends turn user input into a [`command::domain::Command`] and
//! hand it to a [`command::services::Dispatcher`]. The dispatcher runs the
//! middleware chain, resolves the handler by name and always answers with a
//! [`command::domain::CommandResult`], even when a handler panics.
//!
//! # Architecture
//!
//! Darebot follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, HTTP, etc.)
//!
//! # Modules
//!
//! - [`command`]: Commands, results, middleware, registry and dispatcher
//! - [`dare`]: Dares, content generation and generator fallback
//! - [`quote`]: Saved quotes
//! - [`config`]: TOML configuration with environment overrides
//! - [`telemetry`]: Logging setup
//! - [`bot`]: Wiring everything into a ready dispatcher
//! - [`console`]: Line-oriented front end used by the `darebot` binary

pub mod bot;
pub mod command;
pub mod config;
pub mod console;
pub mod dare;
pub mod quote;
pub mod telemetry;
