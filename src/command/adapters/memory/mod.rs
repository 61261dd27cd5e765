//! In-memory adapters for permission checks and rate limiting.
//!
//! These adapters keep all state in process and are suitable both for
//! single-instance deployments and for tests.

mod permission;
mod rate_limit;

pub use permission::InMemoryPermissionService;
pub use rate_limit::FixedWindowRateLimiter;
