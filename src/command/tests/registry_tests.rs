//! Unit tests for the command registry.

use std::sync::Arc;

use crate::command::{
    domain::{CommandData, CommandResult},
    ports::{CommandHandler, handler::MockCommandHandler},
    services::{CommandRegistry, RegistryError},
};
use rstest::rstest;

fn handler() -> Arc<dyn CommandHandler> {
    let mut mock = MockCommandHandler::new();
    mock.expect_handle()
        .returning(|_| CommandResult::ok(CommandData::new("ok")));
    Arc::new(mock)
}

#[rstest]
fn resolve_returns_the_registered_instance() {
    let registered = handler();
    let mut registry = CommandRegistry::new();
    registry
        .register("dare.get", Arc::clone(&registered))
        .expect("registration should succeed");

    let resolved = registry.resolve("dare.get").expect("handler registered");

    assert!(Arc::ptr_eq(&resolved, &registered));
}

#[rstest]
fn resolve_is_case_insensitive() {
    let registry = CommandRegistry::new()
        .with_handler("quote.random", handler())
        .expect("registration should succeed");

    assert!(registry.resolve("Quote.Random").is_some());
    assert!(registry.has(" QUOTE.RANDOM "));
}

#[rstest]
fn unknown_name_resolves_to_none() {
    let registry = CommandRegistry::new();

    assert!(registry.resolve("dare.get").is_none());
    assert!(!registry.has("dare.get"));
}

#[rstest]
fn duplicate_registration_is_rejected() {
    let mut registry = CommandRegistry::new();
    registry
        .register("dare.get", handler())
        .expect("first registration should succeed");

    let duplicate = registry.register("DARE.GET", handler());

    assert_eq!(
        duplicate,
        Err(RegistryError::DuplicateCommand("dare.get".to_owned()))
    );
    assert_eq!(registry.len(), 1);
}

#[rstest]
#[case("")]
#[case("dare get")]
#[case("dare/get")]
fn invalid_names_are_rejected(#[case] name: &str) {
    let outcome = CommandRegistry::new().register(name, handler());

    assert_eq!(outcome, Err(RegistryError::InvalidName(name.to_owned())));
}

#[rstest]
fn introspection_lists_names_in_order_without_mutation() {
    let registry = CommandRegistry::new()
        .with_handler("quote.random", handler())
        .and_then(|registry| registry.with_handler("dare.get", handler()))
        .expect("registration should succeed");

    assert_eq!(registry.names(), vec!["dare.get", "quote.random"]);
    let all: Vec<&str> = registry.all().into_iter().map(|(name, _)| name).collect();
    assert_eq!(all, vec!["dare.get", "quote.random"]);
    assert_eq!(registry.len(), 2);
}
