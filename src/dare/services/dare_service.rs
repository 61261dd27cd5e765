//! Service layer for dare storage and retrieval.

use crate::dare::{
    domain::{
        Dare, DareDomainError, DareDraft, DareFilter, DareId, DareSource, DareStatus, DareUpdate,
        Theme,
    },
    ports::{DareRepository, DareRepositoryError},
};
use mockable::Clock;
use rand::seq::SliceRandom;
use std::sync::Arc;
use thiserror::Error;

/// Order in which stored dares are considered as fallback content.
const FALLBACK_STATUS_ORDER: [DareStatus; 3] =
    [DareStatus::Active, DareStatus::Completed, DareStatus::Archived];

/// Request payload for storing a new dare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDareRequest {
    content: String,
    theme: Theme,
    source: DareSource,
    created_by: Option<String>,
}

impl CreateDareRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(content: impl Into<String>, theme: Theme, source: DareSource) -> Self {
        Self {
            content: content.into(),
            theme,
            source,
            created_by: None,
        }
    }

    /// Records the requesting user.
    #[must_use]
    pub fn with_created_by(mut self, user_id: impl Into<String>) -> Self {
        self.created_by = Some(user_id.into());
        self
    }
}

/// Service-level errors for dare operations.
#[derive(Debug, Error)]
pub enum DareServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DareDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DareRepositoryError),
    /// No dare exists with the given identifier.
    #[error("dare {0} not found")]
    NotFound(DareId),
    /// An update carried no fields.
    #[error("dare update carries no fields")]
    EmptyUpdate,
}

/// Result type for dare service operations.
pub type DareServiceResult<T> = Result<T, DareServiceError>;

/// Dare storage and retrieval service.
#[derive(Clone)]
pub struct DareService<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> DareService<R, C>
where
    R: DareRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new dare service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and stores a new dare.
    ///
    /// # Errors
    ///
    /// Returns [`DareServiceError::Domain`] for invalid content or
    /// [`DareServiceError::Repository`] when storage fails.
    pub async fn create(&self, request: CreateDareRequest) -> DareServiceResult<Dare> {
        let CreateDareRequest {
            content,
            theme,
            source,
            created_by,
        } = request;
        let mut draft = DareDraft::new(content, theme, source, &*self.clock)?;
        if let Some(user_id) = created_by {
            draft = draft.with_created_by(user_id);
        }
        let dare = self.repository.insert(draft).await?;
        tracing::debug!(dare_id = %dare.id(), source = %dare.source(), "stored dare");
        Ok(dare)
    }

    /// Finds a dare by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DareServiceError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, id: DareId) -> DareServiceResult<Option<Dare>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns a dare or [`DareServiceError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`DareServiceError::NotFound`] when absent or
    /// [`DareServiceError::Repository`] when lookup fails.
    pub async fn get(&self, id: DareId) -> DareServiceResult<Dare> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DareServiceError::NotFound(id))
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`DareServiceError::EmptyUpdate`] when `update` has no fields,
    /// [`DareServiceError::NotFound`] when the dare is absent, or repository
    /// errors.
    pub async fn update(&self, id: DareId, update: DareUpdate) -> DareServiceResult<Dare> {
        if update.is_empty() {
            return Err(DareServiceError::EmptyUpdate);
        }
        let mut dare = self.get(id).await?;
        dare.apply(update, &*self.clock);
        self.repository.update(&dare).await?;
        Ok(dare)
    }

    /// Marks a dare completed.
    ///
    /// # Errors
    ///
    /// Returns [`DareServiceError::NotFound`] when the dare is absent, or
    /// repository errors.
    pub async fn complete(&self, id: DareId) -> DareServiceResult<Dare> {
        let mut dare = self.get(id).await?;
        dare.complete(&*self.clock);
        self.repository.update(&dare).await?;
        Ok(dare)
    }

    /// Deletes a dare. Returns `false` when it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DareServiceError::Repository`] when deletion fails.
    pub async fn delete(&self, id: DareId) -> DareServiceResult<bool> {
        Ok(self.repository.delete(id).await?)
    }

    /// Lists dares matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`DareServiceError::Repository`] when lookup fails.
    pub async fn list(&self, filter: &DareFilter) -> DareServiceResult<Vec<Dare>> {
        Ok(self.repository.list(filter).await?)
    }

    /// Picks a random active dare, optionally restricted to a theme.
    ///
    /// # Errors
    ///
    /// Returns [`DareServiceError::Repository`] when lookup fails.
    pub async fn random(&self, theme: Option<&Theme>) -> DareServiceResult<Option<Dare>> {
        let filter = DareFilter {
            theme: theme.cloned(),
            status: Some(DareStatus::Active),
            limit: None,
        };
        let candidates = self.repository.list(&filter).await?;
        Ok(candidates.choose(&mut rand::thread_rng()).cloned())
    }

    /// Deterministically selects stored content to serve when the external
    /// generator fails.
    ///
    /// Statuses are tried in the order active, completed, archived. Within
    /// each status the lowest-id dare with the requested theme wins, then the
    /// lowest-id dare of any theme. The result is `None` only when the store
    /// is empty.
    ///
    /// # Errors
    ///
    /// Returns [`DareServiceError::Repository`] when lookup fails.
    pub async fn select_fallback(&self, theme: &Theme) -> DareServiceResult<Option<Dare>> {
        for status in FALLBACK_STATUS_ORDER {
            for wanted_theme in [Some(theme), None] {
                let filter = DareFilter {
                    theme: wanted_theme.cloned(),
                    status: Some(status),
                    limit: Some(1),
                };
                if let Some(dare) = self.repository.list(&filter).await?.into_iter().next() {
                    return Ok(Some(dare));
                }
            }
        }
        Ok(None)
    }
}
