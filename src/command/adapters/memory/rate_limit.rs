//! Fixed-window in-memory rate limiter.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::command::ports::{
    RateLimitDecision, RateLimitService, RateLimitServiceError, RateLimitServiceResult,
};

/// Allows at most `max_requests` per `(user, command)` in each window.
///
/// A window opens on the first request and resets once its length has
/// elapsed; rejected requests do not count against the budget. Elapsed
/// windows are swept at most once per window length.
#[derive(Clone)]
pub struct FixedWindowRateLimiter<C>
where
    C: Clock + Send + Sync,
{
    max_requests: u32,
    window: TimeDelta,
    clock: Arc<C>,
    state: Arc<RwLock<LimiterState>>,
}

#[derive(Debug, Default)]
struct LimiterState {
    windows: HashMap<(String, String), WindowState>,
    swept_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
struct WindowState {
    started_at: DateTime<Utc>,
    count: u32,
}

impl WindowState {
    fn resets_at(self, window: TimeDelta) -> DateTime<Utc> {
        self.started_at
            .checked_add_signed(window)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl LimiterState {
    fn sweep(&mut self, now: DateTime<Utc>, window: TimeDelta) {
        let due = self.swept_at.is_none_or(|swept_at| {
            swept_at
                .checked_add_signed(window)
                .is_some_and(|next| now >= next)
        });
        if due {
            self.windows
                .retain(|_, state| now < state.resets_at(window));
            self.swept_at = Some(now);
        }
    }
}

fn poisoned(err: impl ToString) -> RateLimitServiceError {
    RateLimitServiceError::unavailable(std::io::Error::other(err.to_string()))
}

impl<C> FixedWindowRateLimiter<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a limiter. Windows longer than chrono can represent are
    /// clamped to the maximum.
    #[must_use]
    pub fn new(max_requests: u32, window: Duration, clock: Arc<C>) -> Self {
        Self {
            max_requests,
            window: TimeDelta::from_std(window).unwrap_or(TimeDelta::MAX),
            clock,
            state: Arc::new(RwLock::new(LimiterState::default())),
        }
    }

    /// Returns how many `(user, command)` windows are currently held.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitServiceError`] when the state lock is poisoned.
    pub fn tracked_windows(&self) -> RateLimitServiceResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.windows.len())
    }
}

#[async_trait]
impl<C> RateLimitService for FixedWindowRateLimiter<C>
where
    C: Clock + Send + Sync,
{
    async fn check_limit(
        &self,
        user_id: &str,
        command_name: &str,
    ) -> RateLimitServiceResult<RateLimitDecision> {
        let now = self.clock.utc();
        let mut state = self.state.write().map_err(poisoned)?;
        state.sweep(now, self.window);

        let entry = state
            .windows
            .entry((user_id.to_owned(), command_name.to_owned()))
            .or_insert(WindowState {
                started_at: now,
                count: 0,
            });

        if now >= entry.resets_at(self.window) {
            *entry = WindowState {
                started_at: now,
                count: 0,
            };
        }

        if entry.count >= self.max_requests {
            let retry_after = (entry.resets_at(self.window) - now).to_std().ok();
            return Ok(RateLimitDecision::deny(retry_after));
        }

        entry.count = entry.count.saturating_add(1);
        Ok(RateLimitDecision::allow())
    }
}
