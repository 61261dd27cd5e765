//! Fallback-aware acquisition of new dare content.
//!
//! The external generator is tried first, up to `attempts` times with a
//! per-call timeout. If every attempt fails, a stored dare is served
//! instead. Only when both the generator and the local fallback fail does
//! acquisition return an error.

use crate::dare::{
    domain::{Dare, DareSource, Theme},
    ports::{ContentGenerator, ContentGeneratorError, DareRepository, GenerationRequest},
    services::{CreateDareRequest, DareService, DareServiceError},
};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Retry and timeout settings for external generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionPolicy {
    /// Number of generator calls before falling back; zero is treated as one.
    pub attempts: u32,
    /// Upper bound for a single generator call.
    pub timeout: Duration,
    /// Pause between consecutive attempts.
    pub retry_delay: Duration,
}

impl Default for AcquisitionPolicy {
    fn default() -> Self {
        Self {
            attempts: 1,
            timeout: Duration::from_secs(10),
            retry_delay: Duration::from_millis(250),
        }
    }
}

/// Parameters for acquiring one dare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquireDareRequest {
    /// Requested theme.
    pub theme: Theme,
    /// Generator name passed to the external service.
    pub generator: String,
    /// User who asked for the dare.
    pub requested_by: Option<String>,
}

/// How an acquired dare was obtained.
#[derive(Debug, Clone)]
pub enum AcquisitionOrigin {
    /// Freshly generated and stored.
    External,
    /// Served from local storage after the generator failed.
    Fallback {
        /// Last generator failure.
        reason: ContentGeneratorError,
    },
}

impl AcquisitionOrigin {
    /// Returns the source tag reported to the caller.
    #[must_use]
    pub const fn source(&self) -> DareSource {
        match self {
            Self::External => DareSource::External,
            Self::Fallback { .. } => DareSource::DatabaseFallback,
        }
    }

    /// Returns `true` when local content was substituted.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// A dare obtained by [`ContentAcquisition::acquire`].
#[derive(Debug, Clone)]
pub struct AcquiredDare {
    /// The stored dare.
    pub dare: Dare,
    /// How it was obtained.
    pub origin: AcquisitionOrigin,
}

/// Errors returned when no dare could be obtained.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// The generator failed and local storage holds no usable dare.
    #[error("content generator failed ({cause}) and no stored dare is available")]
    NoFallback {
        /// Last generator failure.
        cause: ContentGeneratorError,
    },

    /// The generator failed and the fallback lookup failed too.
    #[error("content generator failed ({cause}) and fallback lookup failed: {lookup}")]
    FallbackFailed {
        /// Last generator failure.
        cause: ContentGeneratorError,
        /// Fallback lookup failure.
        lookup: DareServiceError,
    },

    /// Generated content could not be stored.
    #[error("failed to store generated dare: {0}")]
    Persistence(DareServiceError),
}

/// Generator-first, storage-fallback dare acquisition.
pub struct ContentAcquisition<R, G, C>
where
    R: DareRepository,
    G: ContentGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    dares: Arc<DareService<R, C>>,
    generator: Arc<G>,
    policy: AcquisitionPolicy,
}

impl<R, G, C> Clone for ContentAcquisition<R, G, C>
where
    R: DareRepository,
    G: ContentGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            dares: Arc::clone(&self.dares),
            generator: Arc::clone(&self.generator),
            policy: self.policy,
        }
    }
}

impl<R, G, C> ContentAcquisition<R, G, C>
where
    R: DareRepository,
    G: ContentGenerator + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates an acquisition policy runner.
    #[must_use]
    pub const fn new(
        dares: Arc<DareService<R, C>>,
        generator: Arc<G>,
        policy: AcquisitionPolicy,
    ) -> Self {
        Self {
            dares,
            generator,
            policy,
        }
    }

    /// Returns the retry and timeout settings.
    #[must_use]
    pub const fn policy(&self) -> AcquisitionPolicy {
        self.policy
    }

    /// Obtains a dare, preferring freshly generated content.
    ///
    /// # Errors
    ///
    /// Returns [`AcquisitionError`] only when both the generator and the
    /// local fallback fail, or when generated content cannot be stored.
    pub async fn acquire(
        &self,
        request: AcquireDareRequest,
    ) -> Result<AcquiredDare, AcquisitionError> {
        let generation = GenerationRequest::new(request.theme.clone(), request.generator.clone());

        let cause = match self.generate(&generation).await {
            Ok(content) => {
                let mut create = CreateDareRequest::new(
                    content,
                    request.theme.clone(),
                    DareSource::External,
                );
                if let Some(user_id) = request.requested_by.clone() {
                    create = create.with_created_by(user_id);
                }
                match self.dares.create(create).await {
                    Ok(dare) => {
                        return Ok(AcquiredDare {
                            dare,
                            origin: AcquisitionOrigin::External,
                        });
                    }
                    Err(DareServiceError::Domain(invalid)) => {
                        ContentGeneratorError::MalformedPayload(invalid.to_string())
                    }
                    Err(other) => return Err(AcquisitionError::Persistence(other)),
                }
            }
            Err(cause) => cause,
        };

        match self.dares.select_fallback(&request.theme).await {
            Ok(Some(dare)) => {
                tracing::info!(
                    theme = %request.theme,
                    dare_id = %dare.id(),
                    reason = %cause,
                    "serving stored dare after generator failure"
                );
                Ok(AcquiredDare {
                    dare,
                    origin: AcquisitionOrigin::Fallback { reason: cause },
                })
            }
            Ok(None) => Err(AcquisitionError::NoFallback { cause }),
            Err(lookup) => Err(AcquisitionError::FallbackFailed { cause, lookup }),
        }
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, ContentGeneratorError> {
        let attempts = self.policy.attempts.max(1);
        let mut last_error = ContentGeneratorError::Unavailable("no attempt made".to_owned());

        for attempt in 1..=attempts {
            if attempt > 1 && !self.policy.retry_delay.is_zero() {
                tokio::time::sleep(self.policy.retry_delay).await;
            }

            let call = self.generator.generate(request);
            let outcome = tokio::time::timeout(self.policy.timeout, call)
                .await
                .unwrap_or_else(|_| Err(ContentGeneratorError::Timeout(self.policy.timeout)));

            match outcome {
                Ok(generated) if !generated.content.trim().is_empty() => {
                    return Ok(generated.content);
                }
                Ok(_) => {
                    last_error =
                        ContentGeneratorError::MalformedPayload("empty content".to_owned());
                }
                Err(error) => last_error = error,
            }
            tracing::warn!(
                attempt,
                attempts,
                generator = %request.generator,
                theme = %request.theme,
                error = %last_error,
                "content generation attempt failed"
            );
        }

        Err(last_error)
    }
}
