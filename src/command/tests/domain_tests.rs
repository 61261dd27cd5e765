//! Unit tests for command and result domain values.

use crate::command::domain::{
    Command, CommandData, CommandDomainError, CommandError, CommandErrorKind, CommandResult,
};
use rstest::rstest;
use serde_json::json;
use std::time::Duration;

#[rstest]
#[case("", "user-1", CommandDomainError::EmptyCommandName)]
#[case("   ", "user-1", CommandDomainError::EmptyCommandName)]
#[case("dare.get", "", CommandDomainError::EmptyUserId)]
#[case("dare.get", "  ", CommandDomainError::EmptyUserId)]
fn blank_name_or_user_is_rejected(
    #[case] name: &str,
    #[case] user_id: &str,
    #[case] expected: CommandDomainError,
) {
    assert_eq!(Command::new(name, user_id), Err(expected));
}

#[rstest]
fn command_name_is_normalised() {
    let command = Command::new("  Dare.Get ", " user-1 ").expect("valid command");

    assert_eq!(command.name(), "dare.get");
    assert_eq!(command.user_id(), "user-1");
}

#[rstest]
fn enrichment_produces_a_new_value() {
    let original = Command::new("dare.get", "user-1").expect("valid command");
    let enriched = original.clone().with_metadata("id", 3);

    assert!(original.metadata().is_empty());
    assert_eq!(enriched.metadata().get("id"), Some(&json!(3)));
    assert_eq!(original.id(), enriched.id());
}

#[rstest]
#[case(json!(7), Some(7))]
#[case(json!("7"), Some(7))]
#[case(json!("#12"), Some(12))]
#[case(json!(0), None)]
#[case(json!(-3), None)]
#[case(json!("seven"), None)]
#[case(json!(true), None)]
fn id_arguments_accept_numbers_and_numeric_strings(
    #[case] raw: serde_json::Value,
    #[case] expected: Option<u64>,
) {
    let command = Command::new("dare.get", "user-1")
        .expect("valid command")
        .with_metadata("id", raw);

    assert_eq!(command.argument("id").and_then(|value| value.as_id()), expected);
}

#[rstest]
fn optional_count_rejects_non_positive_values() {
    let command = Command::new("dare.list", "user-1")
        .expect("valid command")
        .with_metadata("limit", "abc")
        .with_metadata("page", 3);

    assert_eq!(
        command.optional_count("limit", "Limit"),
        Err(CommandError::validation("Limit must be a positive integer"))
    );
    assert_eq!(command.optional_count("page", "Page"), Ok(Some(3)));
    assert_eq!(command.optional_count("offset", "Offset"), Ok(None));
}

#[rstest]
fn null_and_blank_arguments_are_absent() {
    let command = Command::new("dare.create", "user-1")
        .expect("valid command")
        .with_metadata("theme", serde_json::Value::Null)
        .with_metadata("content", "   ");

    assert!(command.argument("theme").is_none());
    assert!(command.argument("content").and_then(|value| value.as_text()).is_none());
}

#[rstest]
fn ok_result_exposes_data_only() {
    let result = CommandResult::ok(CommandData::new("done").with_field("count", 2));

    assert!(result.is_success());
    assert!(result.error().is_none());
    assert_eq!(result.display_message(), "done");
    assert_eq!(
        result.data().and_then(|data| data.field("count")),
        Some(&json!(2))
    );
}

#[rstest]
fn plain_message_failures_become_internal_errors() {
    let result = CommandResult::fail("boom");

    assert!(!result.is_success());
    assert!(result.data().is_none());
    let error = result.error().expect("failure carries an error");
    assert_eq!(error.kind(), CommandErrorKind::Internal);
    assert_eq!(error.message(), "boom");
}

#[rstest]
fn message_field_cannot_be_overwritten() {
    let data = CommandData::new("real").with_field("message", "fake");

    assert_eq!(data.message(), "real");
    assert!(data.field("message").is_none());
}

#[rstest]
fn not_found_names_entity_and_id() {
    let error = CommandError::not_found("Dare", 7);

    assert_eq!(error.kind(), CommandErrorKind::NotFound);
    assert_eq!(error.message(), "Dare #7 not found");
}

#[rstest]
fn rate_limited_error_keeps_retry_hint() {
    let error = CommandError::rate_limited("dare.create", Some(Duration::from_millis(2500)));

    assert_eq!(error.kind(), CommandErrorKind::RateLimited);
    assert_eq!(error.retry_after(), Some(Duration::from_secs(3)));
    assert!(error.message().contains("try again in 3s"));
}

#[rstest]
#[case(Duration::from_millis(59_600), 60)]
#[case(Duration::from_secs(40), 40)]
#[case(Duration::from_millis(1), 1)]
#[case(Duration::ZERO, 1)]
fn retry_hint_rounds_up_to_whole_seconds(#[case] wait: Duration, #[case] expected: u64) {
    let error = CommandError::rate_limited("quote.list", Some(wait));

    assert_eq!(error.retry_after(), Some(Duration::from_secs(expected)));
    assert!(error.message().ends_with(&format!("try again in {expected}s")));
}

#[rstest]
fn result_serialises_to_success_envelope() {
    let result = CommandResult::ok(
        CommandData::new("Dare #1 retrieved successfully").with_field("dare", json!({"id": 1})),
    );

    let value = serde_json::to_value(&result).expect("serialise result");

    assert_eq!(
        value,
        json!({
            "success": true,
            "data": {"message": "Dare #1 retrieved successfully", "dare": {"id": 1}},
        })
    );
}

#[rstest]
fn failure_envelope_round_trips() {
    let result = CommandResult::fail(CommandError::validation("Dare ID is required"));

    let text = serde_json::to_string(&result).expect("serialise result");
    let parsed: CommandResult = serde_json::from_str(&text).expect("parse result");

    assert_eq!(parsed, result);
}

#[rstest]
fn envelope_with_both_data_and_error_is_rejected() {
    let raw = json!({
        "success": true,
        "data": {"message": "ok"},
        "error": {"kind": "internal", "message": "nope"},
    });

    assert!(serde_json::from_value::<CommandResult>(raw).is_err());
}
