//! In-memory quote repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::quote::{
    domain::{Quote, QuoteDraft, QuoteId},
    ports::{QuoteRepository, QuoteRepositoryError, QuoteRepositoryResult},
};

/// Thread-safe in-memory quote repository with sequential identifiers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuoteRepository {
    state: Arc<RwLock<InMemoryQuoteState>>,
}

#[derive(Debug, Default)]
struct InMemoryQuoteState {
    last_id: u64,
    quotes: BTreeMap<QuoteId, Quote>,
}

impl InMemoryQuoteRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> QuoteRepositoryError {
    QuoteRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn insert(&self, draft: QuoteDraft) -> QuoteRepositoryResult<Quote> {
        let mut state = self.state.write().map_err(poisoned)?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| poisoned("quote identifiers exhausted"))?;
        state.last_id = next;

        let quote = draft.into_quote(QuoteId::new(next));
        state.quotes.insert(quote.id(), quote.clone());
        Ok(quote)
    }

    async fn find_by_id(&self, id: QuoteId) -> QuoteRepositoryResult<Option<Quote>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.quotes.get(&id).cloned())
    }

    async fn delete(&self, id: QuoteId) -> QuoteRepositoryResult<bool> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.quotes.remove(&id).is_some())
    }

    async fn list(&self, limit: Option<usize>) -> QuoteRepositoryResult<Vec<Quote>> {
        let state = self.state.read().map_err(poisoned)?;
        let quotes = state.quotes.values().cloned();
        Ok(match limit {
            Some(max) => quotes.take(max).collect(),
            None => quotes.collect(),
        })
    }
}
