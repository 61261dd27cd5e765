//! Dare management for Darebot.
//!
//! Dares are short challenges grouped by theme. New dares are normally
//! produced by an external content generator; when that generator is
//! unavailable, [`services::ContentAcquisition`] falls back to a dare
//! already stored locally so the user still gets a result. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Command handlers in [`handlers`]

pub mod adapters;
pub mod domain;
pub mod handlers;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
