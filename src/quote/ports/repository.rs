//! Repository port for quotes.

use crate::quote::domain::{Quote, QuoteDraft, QuoteId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for quote repository operations.
pub type QuoteRepositoryResult<T> = Result<T, QuoteRepositoryError>;

/// Quote persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Stores a draft and returns the quote with its identifier.
    async fn insert(&self, draft: QuoteDraft) -> QuoteRepositoryResult<Quote>;

    /// Finds a quote by identifier.
    async fn find_by_id(&self, id: QuoteId) -> QuoteRepositoryResult<Option<Quote>>;

    /// Deletes a quote. Returns `false` when nothing was deleted.
    async fn delete(&self, id: QuoteId) -> QuoteRepositoryResult<bool>;

    /// Returns up to `limit` quotes ordered by ascending identifier.
    async fn list(&self, limit: Option<usize>) -> QuoteRepositoryResult<Vec<Quote>>;
}

/// Errors returned by quote repository implementations.
#[derive(Debug, Clone, Error)]
pub enum QuoteRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl QuoteRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
