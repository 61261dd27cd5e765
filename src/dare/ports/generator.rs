//! External content generator port.

use crate::dare::domain::Theme;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for content generation.
pub type ContentGeneratorResult<T> = Result<T, ContentGeneratorError>;

/// Parameters of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Requested theme.
    pub theme: Theme,
    /// Name of the generator model or preset to use.
    pub generator: String,
}

impl GenerationRequest {
    /// Creates a generation request.
    #[must_use]
    pub fn new(theme: Theme, generator: impl Into<String>) -> Self {
        Self {
            theme,
            generator: generator.into(),
        }
    }
}

/// Text returned by a successful generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    /// Generated dare text.
    pub content: String,
}

/// Single request/response call to an unreliable content source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generates dare text for the request.
    ///
    /// # Errors
    ///
    /// Returns [`ContentGeneratorError`] on timeout, non-success status,
    /// malformed payload, or transport failure.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> ContentGeneratorResult<GeneratedContent>;
}

/// Errors returned by content generator adapters.
#[derive(Debug, Clone, Error)]
pub enum ContentGeneratorError {
    /// The call did not complete in time.
    #[error("content generator timed out after {0:?}")]
    Timeout(Duration),

    /// The generator answered with a non-success status.
    #[error("content generator returned status {0}")]
    Status(u16),

    /// The response could not be interpreted.
    #[error("malformed content generator payload: {0}")]
    MalformedPayload(String),

    /// The generator is not configured or has been switched off.
    #[error("content generator unavailable: {0}")]
    Unavailable(String),

    /// Network or client failure.
    #[error("content generator transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ContentGeneratorError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
