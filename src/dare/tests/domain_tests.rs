//! Domain tests for dare values and lifecycle.

use crate::dare::domain::{
    DareDomainError, DareDraft, DareFilter, DareId, DareSource, DareStatus, DareUpdate, Theme,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn theme(value: &str) -> Theme {
    Theme::new(value).expect("valid theme")
}

#[rstest]
#[case("  Party ", "party")]
#[case("OUTDOOR fun", "outdoor fun")]
#[case("late-night_2", "late-night_2")]
fn theme_is_trimmed_and_lowercased(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(theme(raw).as_str(), expected);
}

#[rstest]
#[case("   ", DareDomainError::EmptyTheme)]
#[case("party!", DareDomainError::InvalidTheme("party!".to_owned()))]
fn theme_rejects_blank_and_unsupported_values(
    #[case] raw: &str,
    #[case] expected: DareDomainError,
) {
    assert_eq!(Theme::new(raw), Err(expected));
}

#[rstest]
fn theme_rejects_names_over_fifty_characters() {
    let long = "a".repeat(51);
    assert!(matches!(
        Theme::new(long),
        Err(DareDomainError::InvalidTheme(_))
    ));
}

#[rstest]
fn draft_trims_content_and_becomes_active(clock: DefaultClock) {
    let draft = DareDraft::new("  Sing a song  ", theme("party"), DareSource::Manual, &clock)
        .expect("valid draft")
        .with_created_by("user-7");

    let dare = draft.into_dare(DareId::new(3));

    assert_eq!(dare.id(), DareId::new(3));
    assert_eq!(dare.content(), "Sing a song");
    assert_eq!(dare.status(), DareStatus::Active);
    assert_eq!(dare.source(), DareSource::Manual);
    assert_eq!(dare.created_by(), Some("user-7"));
    assert_eq!(dare.created_at(), dare.updated_at());
    assert_eq!(dare.completed_at(), None);
}

#[rstest]
#[case("", DareDomainError::EmptyContent)]
#[case("   ", DareDomainError::EmptyContent)]
fn draft_rejects_blank_content(
    clock: DefaultClock,
    #[case] content: &str,
    #[case] expected: DareDomainError,
) {
    let result = DareDraft::new(content, theme("party"), DareSource::Manual, &clock);
    assert_eq!(result, Err(expected));
}

#[rstest]
fn draft_rejects_content_over_limit(clock: DefaultClock) {
    let result = DareDraft::new("x".repeat(501), theme("party"), DareSource::Manual, &clock);
    assert_eq!(result, Err(DareDomainError::ContentTooLong { max: 500 }));
}

#[rstest]
fn completing_records_completion_time(clock: DefaultClock) {
    let mut dare = DareDraft::new("Dance", theme("party"), DareSource::External, &clock)
        .expect("valid draft")
        .into_dare(DareId::new(1));

    dare.complete(&clock);

    assert_eq!(dare.status(), DareStatus::Completed);
    assert!(dare.completed_at().is_some());
}

#[rstest]
fn reactivating_clears_completion_time(clock: DefaultClock) {
    let mut dare = DareDraft::new("Dance", theme("party"), DareSource::External, &clock)
        .expect("valid draft")
        .into_dare(DareId::new(1));
    dare.complete(&clock);

    dare.apply(DareUpdate::new().with_status(DareStatus::Active), &clock);

    assert_eq!(dare.status(), DareStatus::Active);
    assert_eq!(dare.completed_at(), None);
}

#[rstest]
fn update_changes_only_given_fields(clock: DefaultClock) {
    let mut dare = DareDraft::new("Dance", theme("party"), DareSource::External, &clock)
        .expect("valid draft")
        .into_dare(DareId::new(1));
    let update = DareUpdate::new()
        .with_content("Dance backwards")
        .expect("valid content");

    dare.apply(update, &clock);

    assert_eq!(dare.content(), "Dance backwards");
    assert_eq!(dare.theme().as_str(), "party");
    assert_eq!(dare.status(), DareStatus::Active);
}

#[rstest]
fn empty_update_is_detected() {
    assert!(DareUpdate::new().is_empty());
    assert!(!DareUpdate::new().with_theme(theme("outdoor")).is_empty());
}

#[rstest]
fn filter_matches_theme_and_status(clock: DefaultClock) {
    let dare = DareDraft::new("Dance", theme("party"), DareSource::External, &clock)
        .expect("valid draft")
        .into_dare(DareId::new(1));

    let party = DareFilter {
        theme: Some(theme("party")),
        status: Some(DareStatus::Active),
        limit: None,
    };
    let outdoor = DareFilter {
        theme: Some(theme("outdoor")),
        ..DareFilter::default()
    };

    assert!(DareFilter::default().matches(&dare));
    assert!(party.matches(&dare));
    assert!(!outdoor.matches(&dare));
}

#[rstest]
#[case("active", DareStatus::Active)]
#[case(" Completed ", DareStatus::Completed)]
#[case("ARCHIVED", DareStatus::Archived)]
fn status_parses_case_insensitively(#[case] raw: &str, #[case] expected: DareStatus) {
    assert_eq!(DareStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn source_uses_snake_case_names() {
    assert_eq!(DareSource::DatabaseFallback.as_str(), "database_fallback");
    assert_eq!(
        DareSource::try_from("database_fallback"),
        Ok(DareSource::DatabaseFallback)
    );
    assert!(DareSource::try_from("llm").is_err());
}
