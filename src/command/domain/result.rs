//! Uniform outcome of a dispatch.

use super::CommandError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Success payload: a display message plus handler-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandData {
    message: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl CommandData {
    /// Creates a payload carrying only a display message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: Map::new(),
        }
    }

    /// Adds a result field. A `message` key is ignored; use
    /// [`CommandData::new`] to set the display message.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = key.into();
        if name != "message" {
            self.fields.insert(name, value.into());
        }
        self
    }

    /// Returns the human-readable display message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Looks up a result field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns all result fields other than the message.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Outcome of one dispatch: exactly one of data or error is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ResultEnvelope", try_from = "ResultEnvelope")]
pub enum CommandResult {
    /// The command succeeded.
    Ok(CommandData),
    /// The command failed.
    Failed(CommandError),
}

impl CommandResult {
    /// Builds a successful result.
    #[must_use]
    pub const fn ok(data: CommandData) -> Self {
        Self::Ok(data)
    }

    /// Builds a failed result from a tagged error or a plain message.
    ///
    /// Plain messages become [`super::CommandErrorKind::Internal`] errors.
    #[must_use]
    pub fn fail(error: impl Into<CommandError>) -> Self {
        Self::Failed(error.into())
    }

    /// Returns `true` for a successful result.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns the success payload.
    #[must_use]
    pub const fn data(&self) -> Option<&CommandData> {
        match self {
            Self::Ok(data) => Some(data),
            Self::Failed(_) => None,
        }
    }

    /// Returns the failure.
    #[must_use]
    pub const fn error(&self) -> Option<&CommandError> {
        match self {
            Self::Ok(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Returns the text a caller should render: the data message on
    /// success, the error message on failure.
    #[must_use]
    pub fn display_message(&self) -> &str {
        match self {
            Self::Ok(data) => data.message(),
            Self::Failed(error) => error.message(),
        }
    }
}

impl From<Result<CommandData, CommandError>> for CommandResult {
    fn from(outcome: Result<CommandData, CommandError>) -> Self {
        match outcome {
            Ok(data) => Self::Ok(data),
            Err(error) => Self::Failed(error),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ResultEnvelope {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<CommandData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<CommandError>,
}

impl From<CommandResult> for ResultEnvelope {
    fn from(result: CommandResult) -> Self {
        match result {
            CommandResult::Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            CommandResult::Failed(error) => Self {
                success: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<ResultEnvelope> for CommandResult {
    type Error = String;

    fn try_from(envelope: ResultEnvelope) -> Result<Self, Self::Error> {
        match (envelope.success, envelope.data, envelope.error) {
            (true, Some(data), None) => Ok(Self::Ok(data)),
            (false, None, Some(error)) => Ok(Self::Failed(error)),
            _ => Err("result envelope must carry data on success or error on failure".to_owned()),
        }
    }
}
