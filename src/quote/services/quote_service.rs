//! Service layer for quote storage and recall.

use crate::quote::{
    domain::{Quote, QuoteDomainError, QuoteDraft, QuoteId},
    ports::{QuoteRepository, QuoteRepositoryError},
};
use mockable::Clock;
use rand::seq::SliceRandom;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for saving a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddQuoteRequest {
    text: String,
    author: Option<String>,
    added_by: String,
}

impl AddQuoteRequest {
    /// Creates a request for an unattributed quote.
    #[must_use]
    pub fn new(text: impl Into<String>, added_by: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: None,
            added_by: added_by.into(),
        }
    }

    /// Attributes the quote to an author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Service-level errors for quote operations.
#[derive(Debug, Error)]
pub enum QuoteServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] QuoteDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] QuoteRepositoryError),
    /// No quote exists with the given identifier.
    #[error("quote {0} not found")]
    NotFound(QuoteId),
}

/// Result type for quote service operations.
pub type QuoteServiceResult<T> = Result<T, QuoteServiceError>;

/// Quote storage and recall service.
#[derive(Clone)]
pub struct QuoteService<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> QuoteService<R, C>
where
    R: QuoteRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new quote service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and stores a quote.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteServiceError::Domain`] for invalid input or
    /// [`QuoteServiceError::Repository`] when storage fails.
    pub async fn add(&self, request: AddQuoteRequest) -> QuoteServiceResult<Quote> {
        let draft = QuoteDraft::new(
            request.text,
            request.author.as_deref(),
            request.added_by,
            &*self.clock,
        )?;
        let quote = self.repository.insert(draft).await?;
        tracing::debug!(quote_id = %quote.id(), "stored quote");
        Ok(quote)
    }

    /// Finds a quote by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteServiceError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, id: QuoteId) -> QuoteServiceResult<Option<Quote>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns a quote or [`QuoteServiceError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`QuoteServiceError::NotFound`] when absent or repository
    /// errors.
    pub async fn get(&self, id: QuoteId) -> QuoteServiceResult<Quote> {
        self.find_by_id(id)
            .await?
            .ok_or(QuoteServiceError::NotFound(id))
    }

    /// Deletes a quote. Returns `false` when it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteServiceError::Repository`] when deletion fails.
    pub async fn delete(&self, id: QuoteId) -> QuoteServiceResult<bool> {
        Ok(self.repository.delete(id).await?)
    }

    /// Lists stored quotes.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteServiceError::Repository`] when lookup fails.
    pub async fn list(&self, limit: Option<usize>) -> QuoteServiceResult<Vec<Quote>> {
        Ok(self.repository.list(limit).await?)
    }

    /// Picks a random stored quote.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteServiceError::Repository`] when lookup fails.
    pub async fn random(&self) -> QuoteServiceResult<Option<Quote>> {
        let quotes = self.repository.list(None).await?;
        Ok(quotes.choose(&mut rand::thread_rng()).cloned())
    }
}
