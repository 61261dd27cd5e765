//! Domain model for dares.

mod dare;
mod error;
mod ids;
mod source;
mod status;
mod theme;

pub use dare::{Dare, DareDraft, DareFilter, DareUpdate, PersistedDareData};
pub use error::{DareDomainError, ParseDareSourceError, ParseDareStatusError};
pub use ids::DareId;
pub use source::DareSource;
pub use status::DareStatus;
pub use theme::Theme;
