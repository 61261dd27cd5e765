//! Port contracts for quote persistence.

pub mod repository;

pub use repository::{QuoteRepository, QuoteRepositoryError, QuoteRepositoryResult};
