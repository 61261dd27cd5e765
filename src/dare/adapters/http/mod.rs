//! HTTP adapters for external dare content generation.

mod generator;

pub use generator::HttpContentGenerator;
