//! Unit tests for dare storage, acquisition and command handlers.

mod domain_tests;
