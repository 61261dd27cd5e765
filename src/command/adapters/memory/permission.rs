//! In-memory permission service.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::command::ports::{PermissionService, PermissionServiceError, PermissionServiceResult};

/// Role-based permission table kept in memory.
///
/// Unrestricted commands are open to every user, restricted commands only
/// to admins, and blocked users are denied everything.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPermissionService {
    state: Arc<RwLock<PermissionState>>,
}

#[derive(Debug, Default)]
struct PermissionState {
    admins: HashSet<String>,
    restricted_commands: HashSet<String>,
    blocked_users: HashSet<String>,
}

impl InMemoryPermissionService {
    /// Creates a permission table with no admins and no restrictions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a permission table from admin user ids and restricted
    /// command names.
    #[must_use]
    pub fn with_rules(
        admins: impl IntoIterator<Item = String>,
        restricted_commands: impl IntoIterator<Item = String>,
    ) -> Self {
        let state = PermissionState {
            admins: admins.into_iter().collect(),
            restricted_commands: restricted_commands
                .into_iter()
                .map(|name| name.trim().to_ascii_lowercase())
                .collect(),
            blocked_users: HashSet::new(),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Denies every command to `user_id` until unblocked.
    ///
    /// # Errors
    ///
    /// Returns [`PermissionServiceError`] when lock acquisition fails.
    pub fn block_user(&self, user_id: impl Into<String>) -> PermissionServiceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PermissionServiceError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        state.blocked_users.insert(user_id.into());
        Ok(())
    }

    /// Lifts a block placed with [`InMemoryPermissionService::block_user`].
    ///
    /// # Errors
    ///
    /// Returns [`PermissionServiceError`] when lock acquisition fails.
    pub fn unblock_user(&self, user_id: &str) -> PermissionServiceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PermissionServiceError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        state.blocked_users.remove(user_id);
        Ok(())
    }
}

#[async_trait]
impl PermissionService for InMemoryPermissionService {
    async fn check_permission(
        &self,
        user_id: &str,
        command_name: &str,
    ) -> PermissionServiceResult<bool> {
        let state = self.state.read().map_err(|err| {
            PermissionServiceError::unavailable(std::io::Error::other(err.to_string()))
        })?;

        if state.blocked_users.contains(user_id) {
            return Ok(false);
        }
        if state.restricted_commands.contains(command_name) {
            return Ok(state.admins.contains(user_id));
        }
        Ok(true)
    }
}
