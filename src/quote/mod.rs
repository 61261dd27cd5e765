//! Quote collection for Darebot.
//!
//! Users save memorable lines with an author and can later recall them by
//! id or at random. Same hexagonal split as [`crate::dare`], without an
//! external content source.

pub mod adapters;
pub mod domain;
pub mod handlers;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
