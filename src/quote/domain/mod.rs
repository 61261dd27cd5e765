//! Domain model for quotes.

mod error;
mod quote;

pub use error::QuoteDomainError;
pub use quote::{Quote, QuoteDraft, QuoteId};
