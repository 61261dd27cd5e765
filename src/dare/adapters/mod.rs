//! Adapter implementations for dare persistence and content generation.

pub mod http;
pub mod memory;
