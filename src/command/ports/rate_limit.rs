//! Rate-limit service port.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for rate-limit checks.
pub type RateLimitServiceResult<T> = Result<T, RateLimitServiceError>;

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request may proceed.
    pub allowed: bool,
    /// Time until the user may retry, when known.
    pub retry_after: Option<Duration>,
}

impl RateLimitDecision {
    /// A decision that lets the request through.
    #[must_use]
    pub const fn allow() -> Self {
        Self {
            allowed: true,
            retry_after: None,
        }
    }

    /// A decision that rejects the request.
    #[must_use]
    pub const fn deny(retry_after: Option<Duration>) -> Self {
        Self {
            allowed: false,
            retry_after,
        }
    }
}

/// Tracks and enforces per-user command budgets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateLimitService: Send + Sync {
    /// Records an attempt by `user_id` to run `command_name` and reports
    /// whether it is within budget.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitServiceError`] when the limiter backend fails.
    async fn check_limit(
        &self,
        user_id: &str,
        command_name: &str,
    ) -> RateLimitServiceResult<RateLimitDecision>;
}

/// Errors returned by rate-limit service implementations.
#[derive(Debug, Clone, Error)]
pub enum RateLimitServiceError {
    /// The limiter backend is unreachable or failed.
    #[error("rate-limit service unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl RateLimitServiceError {
    /// Wraps a backend failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
