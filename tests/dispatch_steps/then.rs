//! Then steps for command dispatch BDD scenarios.

use super::world::DispatchWorld;
use rstest_bdd_macros::then;

#[then("the command succeeds")]
fn command_succeeds(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    if let Some(error) = result.error() {
        return Err(eyre::eyre!(
            "expected success, got {} failure: {}",
            error.kind(),
            error.message()
        ));
    }
    Ok(())
}

#[then(r#"the command fails with kind "{kind}""#)]
fn command_fails_with_kind(world: &DispatchWorld, kind: String) -> Result<(), eyre::Report> {
    let error = world
        .last_result()?
        .error()
        .ok_or_else(|| eyre::eyre!("expected failure, command succeeded"))?;
    if error.kind().as_str() != kind {
        return Err(eyre::eyre!(
            "expected kind {kind}, found {} ({})",
            error.kind(),
            error.message()
        ));
    }
    Ok(())
}

#[then(r#"the command fails with message "{message}""#)]
fn command_fails_with_message(
    world: &DispatchWorld,
    message: String,
) -> Result<(), eyre::Report> {
    let error = world
        .last_result()?
        .error()
        .ok_or_else(|| eyre::eyre!("expected failure, command succeeded"))?;
    if error.message() != message {
        return Err(eyre::eyre!(
            "expected message {message:?}, found {:?}",
            error.message()
        ));
    }
    Ok(())
}

#[then(r#"the dare source is "{source}""#)]
fn dare_source_is(world: &DispatchWorld, source: String) -> Result<(), eyre::Report> {
    let found = world
        .last_result()?
        .data()
        .and_then(|data| data.field("source"))
        .and_then(|value| value.as_str())
        .ok_or_else(|| eyre::eyre!("result carries no dare source"))?;
    if found != source {
        return Err(eyre::eyre!("expected source {source}, found {found}"));
    }
    Ok(())
}

#[then("the result is flagged as a fallback")]
fn result_is_fallback(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let flagged = world
        .last_result()?
        .data()
        .and_then(|data| data.field("fallback"))
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);
    if !flagged {
        return Err(eyre::eyre!("expected the result to be flagged as fallback"));
    }
    Ok(())
}
