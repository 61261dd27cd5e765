//! In-memory quote adapters.

mod repository;

pub use repository::InMemoryQuoteRepository;
