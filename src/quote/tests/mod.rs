//! Unit tests for quote storage and command handlers.

mod handler_tests;
