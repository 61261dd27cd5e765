//! Repository port for dare persistence and lookup.

use crate::dare::domain::{Dare, DareDraft, DareFilter, DareId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for dare repository operations.
pub type DareRepositoryResult<T> = Result<T, DareRepositoryError>;

/// Dare persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DareRepository: Send + Sync {
    /// Stores a draft and returns the dare with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DareRepositoryError::Persistence`] when storage fails.
    async fn insert(&self, draft: DareDraft) -> DareRepositoryResult<Dare>;

    /// Persists changes to an existing dare.
    ///
    /// # Errors
    ///
    /// Returns [`DareRepositoryError::NotFound`] when the dare does not exist.
    async fn update(&self, dare: &Dare) -> DareRepositoryResult<()>;

    /// Finds a dare by identifier.
    ///
    /// Returns `None` when the dare does not exist.
    async fn find_by_id(&self, id: DareId) -> DareRepositoryResult<Option<Dare>>;

    /// Deletes a dare. Returns `false` when nothing was deleted.
    async fn delete(&self, id: DareId) -> DareRepositoryResult<bool>;

    /// Returns dares matching `filter`, ordered by ascending identifier.
    async fn list(&self, filter: &DareFilter) -> DareRepositoryResult<Vec<Dare>>;
}

/// Errors returned by dare repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DareRepositoryError {
    /// The dare was not found.
    #[error("dare not found: {0}")]
    NotFound(DareId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DareRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
