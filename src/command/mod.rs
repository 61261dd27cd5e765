//! Command dispatch pipeline for Darebot.
//!
//! A raw chat invocation is represented as a [`domain::Command`], passed
//! through an ordered [`middleware::MiddlewareChain`] (authorization, then
//! rate limiting), routed through a [`services::CommandRegistry`] to exactly
//! one [`ports::CommandHandler`], and converted into a uniform
//! [`domain::CommandResult`]. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Pre-processing steps in [`middleware`]
//! - Adapter implementations in [`adapters`]
//! - Registry and dispatcher in [`services`]

pub mod adapters;
pub mod domain;
pub mod middleware;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
