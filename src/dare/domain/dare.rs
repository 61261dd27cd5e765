//! Dare aggregate root and its companion value types.

use super::{DareDomainError, DareId, DareSource, DareStatus, Theme};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Maximum length of dare content in characters.
const MAX_CONTENT_LENGTH: usize = 500;

fn validate_content(value: impl Into<String>) -> Result<String, DareDomainError> {
    let trimmed = value.into().trim().to_owned();
    if trimmed.is_empty() {
        return Err(DareDomainError::EmptyContent);
    }
    if trimmed.chars().count() > MAX_CONTENT_LENGTH {
        return Err(DareDomainError::ContentTooLong {
            max: MAX_CONTENT_LENGTH,
        });
    }
    Ok(trimmed)
}

/// Validated content for a dare that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DareDraft {
    content: String,
    theme: Theme,
    source: DareSource,
    created_by: Option<String>,
    created_at: DateTime<Utc>,
}

impl DareDraft {
    /// Creates a draft stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`DareDomainError::EmptyContent`] or
    /// [`DareDomainError::ContentTooLong`] when the content is invalid.
    pub fn new(
        content: impl Into<String>,
        theme: Theme,
        source: DareSource,
        clock: &impl Clock,
    ) -> Result<Self, DareDomainError> {
        Ok(Self {
            content: validate_content(content)?,
            theme,
            source,
            created_by: None,
            created_at: clock.utc(),
        })
    }

    /// Records the user who requested the dare.
    #[must_use]
    pub fn with_created_by(mut self, user_id: impl Into<String>) -> Self {
        self.created_by = Some(user_id.into());
        self
    }

    /// Returns the draft content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the draft theme.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the content source.
    #[must_use]
    pub const fn source(&self) -> DareSource {
        self.source
    }

    /// Converts the draft into a stored dare with the assigned identifier.
    #[must_use]
    pub fn into_dare(self, id: DareId) -> Dare {
        Dare {
            id,
            content: self.content,
            theme: self.theme,
            status: DareStatus::Active,
            source: self.source,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.created_at,
            completed_at: None,
        }
    }
}

/// A stored dare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dare {
    id: DareId,
    content: String,
    theme: Theme,
    status: DareStatus,
    source: DareSource,
    created_by: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted dare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDareData {
    /// Persisted identifier.
    pub id: DareId,
    /// Persisted content.
    pub content: String,
    /// Persisted theme.
    pub theme: Theme,
    /// Persisted lifecycle status.
    pub status: DareStatus,
    /// Persisted content source.
    pub source: DareSource,
    /// User who requested the dare, if recorded.
    pub created_by: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Dare {
    /// Reconstructs a dare from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDareData) -> Self {
        Self {
            id: data.id,
            content: data.content,
            theme: data.theme,
            status: data.status,
            source: data.source,
            created_by: data.created_by,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> DareId {
        self.id
    }

    /// Returns the dare text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the theme.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> DareStatus {
        self.status
    }

    /// Returns where the content came from.
    #[must_use]
    pub const fn source(&self) -> DareSource {
        self.source
    }

    /// Returns the requesting user, if recorded.
    #[must_use]
    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Applies a partial update.
    pub fn apply(&mut self, update: DareUpdate, clock: &impl Clock) {
        let DareUpdate {
            content,
            theme,
            status,
        } = update;
        if let Some(new_content) = content {
            self.content = new_content;
        }
        if let Some(new_theme) = theme {
            self.theme = new_theme;
        }
        if let Some(new_status) = status {
            self.set_status(new_status, clock);
        }
        self.updated_at = clock.utc();
    }

    /// Marks the dare completed.
    pub fn complete(&mut self, clock: &impl Clock) {
        self.set_status(DareStatus::Completed, clock);
        self.updated_at = clock.utc();
    }

    fn set_status(&mut self, status: DareStatus, clock: &impl Clock) {
        self.completed_at = match status {
            DareStatus::Completed => self.completed_at.or_else(|| Some(clock.utc())),
            DareStatus::Active | DareStatus::Archived => None,
        };
        self.status = status;
    }
}

/// Partial update of a dare's mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DareUpdate {
    content: Option<String>,
    theme: Option<Theme>,
    status: Option<DareStatus>,
}

impl DareUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets new content.
    ///
    /// # Errors
    ///
    /// Returns [`DareDomainError`] when the content is empty or too long.
    pub fn with_content(mut self, content: impl Into<String>) -> Result<Self, DareDomainError> {
        self.content = Some(validate_content(content)?);
        Ok(self)
    }

    /// Sets a new theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Sets a new status.
    #[must_use]
    pub const fn with_status(mut self, status: DareStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none() && self.theme.is_none() && self.status.is_none()
    }
}

/// Criteria for listing dares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DareFilter {
    /// Only dares with this theme.
    pub theme: Option<Theme>,
    /// Only dares with this status.
    pub status: Option<DareStatus>,
    /// Maximum number of dares returned.
    pub limit: Option<usize>,
}

impl DareFilter {
    /// Returns `true` when `dare` satisfies the theme and status criteria.
    #[must_use]
    pub fn matches(&self, dare: &Dare) -> bool {
        self.theme.as_ref().is_none_or(|theme| dare.theme() == theme)
            && self.status.is_none_or(|status| dare.status() == status)
    }
}
