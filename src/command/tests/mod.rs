//! Unit tests for the command dispatch pipeline.

mod dispatcher_tests;
mod domain_tests;
mod registry_tests;
