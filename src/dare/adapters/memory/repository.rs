//! In-memory dare repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::dare::{
    domain::{Dare, DareDraft, DareFilter, DareId},
    ports::{DareRepository, DareRepositoryError, DareRepositoryResult},
};

/// Thread-safe in-memory dare repository with sequential identifiers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDareRepository {
    state: Arc<RwLock<InMemoryDareState>>,
}

#[derive(Debug, Default)]
struct InMemoryDareState {
    last_id: u64,
    dares: BTreeMap<DareId, Dare>,
}

impl InMemoryDareRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DareRepository for InMemoryDareRepository {
    async fn insert(&self, draft: DareDraft) -> DareRepositoryResult<Dare> {
        let mut state = self.state.write().map_err(|err| {
            DareRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            DareRepositoryError::persistence(std::io::Error::other("dare identifiers exhausted"))
        })?;
        state.last_id = next;

        let dare = draft.into_dare(DareId::new(next));
        state.dares.insert(dare.id(), dare.clone());
        Ok(dare)
    }

    async fn update(&self, dare: &Dare) -> DareRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            DareRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = state
            .dares
            .get_mut(&dare.id())
            .ok_or(DareRepositoryError::NotFound(dare.id()))?;
        *stored = dare.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: DareId) -> DareRepositoryResult<Option<Dare>> {
        let state = self.state.read().map_err(|err| {
            DareRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.dares.get(&id).cloned())
    }

    async fn delete(&self, id: DareId) -> DareRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            DareRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.dares.remove(&id).is_some())
    }

    async fn list(&self, filter: &DareFilter) -> DareRepositoryResult<Vec<Dare>> {
        let state = self.state.read().map_err(|err| {
            DareRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let matching = state.dares.values().filter(|dare| filter.matches(dare));
        let dares = match filter.limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        };
        Ok(dares)
    }
}
