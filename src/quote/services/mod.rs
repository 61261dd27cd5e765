//! Application services for quotes.

mod quote_service;

pub use quote_service::{AddQuoteRequest, QuoteService, QuoteServiceError, QuoteServiceResult};
