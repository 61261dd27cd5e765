//! Tests for quote command handlers.

use std::sync::Arc;

use crate::command::{
    domain::{Command, CommandErrorKind, CommandResult},
    services::CommandRegistry,
};
use crate::quote::{
    adapters::memory::InMemoryQuoteRepository,
    handlers::{self, names},
    services::QuoteService,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn registry() -> CommandRegistry {
    let quotes = Arc::new(QuoteService::new(
        Arc::new(InMemoryQuoteRepository::new()),
        Arc::new(DefaultClock),
    ));
    let mut registry = CommandRegistry::new();
    handlers::register(&mut registry, &quotes).expect("quote handlers should register");
    registry
}

async fn run(registry: &CommandRegistry, name: &str, arguments: Value) -> CommandResult {
    let Value::Object(map) = arguments else {
        panic!("arguments must be a JSON object");
    };
    let command = Command::new(name, "user-1")
        .expect("valid command")
        .with_arguments(map);
    registry
        .resolve(name)
        .expect("handler registered")
        .handle(&command)
        .await
}

fn field<'a>(result: &'a CommandResult, key: &str) -> Option<&'a Value> {
    result.data().and_then(|data| data.field(key))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_requires_text(registry: CommandRegistry) {
    let result = run(&registry, names::ADD, json!({"author": "Ada"})).await;

    assert_eq!(
        result.error().map(|error| error.kind()),
        Some(CommandErrorKind::Validation)
    );
    assert_eq!(result.display_message(), "Quote text is required");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_defaults_author_and_get_returns_quote(registry: CommandRegistry) {
    let added = run(&registry, names::ADD, json!({"text": "Be curious"})).await;
    let fetched = run(&registry, names::GET, json!({"id": 1})).await;

    assert_eq!(added.display_message(), "Quote #1 added");
    assert_eq!(fetched.display_message(), "\"Be curious\" - Unknown");
    let quote = field(&fetched, "quote").expect("quote payload");
    assert_eq!(quote["author"], json!("Unknown"));
    assert_eq!(quote["added_by"], json!("user-1"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_without_id_is_a_validation_failure(registry: CommandRegistry) {
    let result = run(&registry, names::GET, json!({})).await;
    assert_eq!(result.display_message(), "Quote ID is required");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_uses_quote_id_argument(registry: CommandRegistry) {
    run(&registry, names::ADD, json!({"text": "Be curious"})).await;

    let ignored = run(&registry, names::DELETE, json!({"id": 1})).await;
    let deleted = run(&registry, names::DELETE, json!({"quote_id": 1})).await;
    let again = run(&registry, names::DELETE, json!({"quote_id": 1})).await;

    assert_eq!(ignored.display_message(), "Quote ID is required");
    assert_eq!(deleted.display_message(), "Quote #1 deleted successfully");
    assert_eq!(
        again.error().map(|error| error.kind()),
        Some(CommandErrorKind::NotFound)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn random_fails_on_empty_store(registry: CommandRegistry) {
    let result = run(&registry, names::RANDOM, json!({})).await;

    assert!(!result.is_success());
    assert_eq!(result.display_message(), "No quotes available");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_succeeds_on_empty_store(registry: CommandRegistry) {
    let result = run(&registry, names::LIST, json!({})).await;

    assert!(result.is_success());
    assert_eq!(field(&result, "quotes"), Some(&json!([])));
    assert_eq!(field(&result, "count"), Some(&json!(0)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_reports_saved_quotes(registry: CommandRegistry) {
    run(&registry, names::ADD, json!({"text": "One", "author": "A"})).await;
    run(&registry, names::ADD, json!({"text": "Two", "author": "B"})).await;

    let result = run(&registry, names::LIST, json!({"limit": 1})).await;

    assert_eq!(result.display_message(), "Found 1 quote");
    assert_eq!(field(&result, "count"), Some(&json!(1)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_rejects_invalid_limit(registry: CommandRegistry) {
    let result = run(&registry, names::LIST, json!({"limit": "abc"})).await;

    assert!(!result.is_success());
    assert_eq!(result.display_message(), "Limit must be a positive integer");
}
