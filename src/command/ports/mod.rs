//! Port contracts consumed by the dispatch pipeline.
//!
//! Handlers, permission checks and rate limits are all injected through
//! these traits; the pipeline never reaches for ambient global state.

pub mod handler;
pub mod permission;
pub mod rate_limit;

pub use handler::CommandHandler;
pub use permission::{PermissionService, PermissionServiceError, PermissionServiceResult};
pub use rate_limit::{
    RateLimitDecision, RateLimitService, RateLimitServiceError, RateLimitServiceResult,
};
