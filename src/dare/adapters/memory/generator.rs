//! Scripted content generator for tests and offline runs.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::dare::ports::{
    ContentGenerator, ContentGeneratorError, ContentGeneratorResult, GeneratedContent,
    GenerationRequest,
};

/// Content generator that replays queued responses.
///
/// Each call pops the next scripted response. Once the script is empty
/// every call fails with [`ContentGeneratorError::Unavailable`], which
/// makes an unscripted instance behave like a generator that is down.
#[derive(Debug, Clone, Default)]
pub struct ScriptedContentGenerator {
    state: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    responses: VecDeque<ContentGeneratorResult<GeneratedContent>>,
    requests: Vec<GenerationRequest>,
}

impl ScriptedContentGenerator {
    /// Creates a generator with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    #[must_use]
    pub fn then_content(self, content: impl Into<String>) -> Self {
        self.push(Ok(GeneratedContent {
            content: content.into(),
        }))
    }

    /// Queues a failure.
    #[must_use]
    pub fn then_error(self, error: ContentGeneratorError) -> Self {
        self.push(Err(error))
    }

    /// Returns every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.state
            .lock()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }

    fn push(self, response: ContentGeneratorResult<GeneratedContent>) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.responses.push_back(response);
        }
        self
    }
}

#[async_trait]
impl ContentGenerator for ScriptedContentGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> ContentGeneratorResult<GeneratedContent> {
        let mut state = self
            .state
            .lock()
            .map_err(|err| ContentGeneratorError::Unavailable(err.to_string()))?;
        state.requests.push(request.clone());
        state.responses.pop_front().unwrap_or_else(|| {
            Err(ContentGeneratorError::Unavailable(
                "no scripted response".to_owned(),
            ))
        })
    }
}
