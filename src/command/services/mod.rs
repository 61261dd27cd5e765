//! Registry and dispatcher services for the command pipeline.

mod dispatcher;
mod registry;

pub use dispatcher::Dispatcher;
pub use registry::{CommandRegistry, RegistryError, RegistryResult};
