//! Permission service port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for permission checks.
pub type PermissionServiceResult<T> = Result<T, PermissionServiceError>;

/// Decides whether a user may run a command.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionService: Send + Sync {
    /// Returns `true` when `user_id` may run `command_name`.
    ///
    /// # Errors
    ///
    /// Returns [`PermissionServiceError`] when the permission backend cannot
    /// answer. Callers treat this as a denial.
    async fn check_permission(
        &self,
        user_id: &str,
        command_name: &str,
    ) -> PermissionServiceResult<bool>;
}

/// Errors returned by permission service implementations.
#[derive(Debug, Clone, Error)]
pub enum PermissionServiceError {
    /// The permission backend is unreachable or failed.
    #[error("permission service unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl PermissionServiceError {
    /// Wraps a backend failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
