//! In-memory dare adapters.

mod generator;
mod repository;

pub use generator::ScriptedContentGenerator;
pub use repository::InMemoryDareRepository;
