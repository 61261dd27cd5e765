//! Domain model for command dispatch.
//!
//! Commands and results are plain values: a [`Command`] is immutable once
//! built and a [`CommandResult`] is produced exactly once per dispatch.

mod command;
mod error;
mod metadata;
mod result;

pub use command::{Command, CommandId};
pub use error::{CommandDomainError, CommandError, CommandErrorKind};
pub use metadata::MetadataValue;
pub use result::{CommandData, CommandResult};
