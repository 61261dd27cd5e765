//! Adapter implementations for the permission and rate-limit ports.

pub mod memory;
