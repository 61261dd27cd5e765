//! Port contracts for dare persistence and content generation.

pub mod generator;
pub mod repository;

pub use generator::{
    ContentGenerator, ContentGeneratorError, ContentGeneratorResult, GeneratedContent,
    GenerationRequest,
};
pub use repository::{DareRepository, DareRepositoryError, DareRepositoryResult};
