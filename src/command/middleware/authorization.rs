//! Authorization middleware.

use super::Middleware;
use crate::command::domain::{Command, CommandError};
use crate::command::ports::PermissionService;
use async_trait::async_trait;
use std::sync::Arc;

/// Rejects commands the permission service does not allow.
///
/// Permission-service failures are treated as denials.
pub struct AuthorizationMiddleware<P>
where
    P: PermissionService,
{
    permissions: Arc<P>,
}

impl<P> AuthorizationMiddleware<P>
where
    P: PermissionService,
{
    /// Creates an authorization step backed by `permissions`.
    #[must_use]
    pub const fn new(permissions: Arc<P>) -> Self {
        Self { permissions }
    }
}

#[async_trait]
impl<P> Middleware for AuthorizationMiddleware<P>
where
    P: PermissionService + 'static,
{
    fn name(&self) -> &'static str {
        "authorization"
    }

    async fn process(&self, command: Command) -> Result<Command, CommandError> {
        match self
            .permissions
            .check_permission(command.user_id(), command.name())
            .await
        {
            Ok(true) => Ok(command),
            Ok(false) => {
                tracing::info!(
                    user_id = command.user_id(),
                    command = command.name(),
                    "permission denied"
                );
                Err(CommandError::permission_denied(command.name()))
            }
            Err(error) => {
                tracing::warn!(
                    user_id = command.user_id(),
                    command = command.name(),
                    %error,
                    "permission check failed, denying"
                );
                Err(CommandError::permission_denied(command.name()).with_cause(error.to_string()))
            }
        }
    }
}
