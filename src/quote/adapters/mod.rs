//! Adapter implementations for quote persistence.

pub mod memory;
