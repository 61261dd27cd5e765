//! Unit tests for dispatcher failure isolation and routing.

use std::sync::Arc;

use crate::command::{
    domain::{Command, CommandData, CommandError, CommandErrorKind, CommandResult},
    middleware::{AuthorizationMiddleware, Middleware, MiddlewareChain, RateLimitMiddleware},
    ports::{
        CommandHandler, PermissionService, PermissionServiceResult, handler::MockCommandHandler,
        rate_limit::MockRateLimitService,
    },
    services::{CommandRegistry, Dispatcher},
};
use async_trait::async_trait;
use rstest::rstest;

struct PanicsImmediately;

#[async_trait]
impl CommandHandler for PanicsImmediately {
    async fn handle(&self, _command: &Command) -> CommandResult {
        panic!("handler exploded");
    }
}

struct PanicsAfterSuspending;

#[async_trait]
impl CommandHandler for PanicsAfterSuspending {
    async fn handle(&self, _command: &Command) -> CommandResult {
        tokio::task::yield_now().await;
        panic!("{}", String::from("late failure"));
    }
}

struct EchoesMetadata;

#[async_trait]
impl CommandHandler for EchoesMetadata {
    async fn handle(&self, command: &Command) -> CommandResult {
        let locale = command
            .argument("locale")
            .and_then(|value| value.as_text())
            .unwrap_or("none")
            .to_owned();
        CommandResult::ok(CommandData::new(format!("locale: {locale}")))
    }
}

struct AddsLocale;

#[async_trait]
impl Middleware for AddsLocale {
    fn name(&self) -> &'static str {
        "locale"
    }

    async fn process(&self, command: Command) -> Result<Command, CommandError> {
        Ok(command.with_metadata("locale", "en-GB"))
    }
}

struct RejectsEverything;

#[async_trait]
impl Middleware for RejectsEverything {
    fn name(&self) -> &'static str {
        "reject"
    }

    async fn process(&self, _command: Command) -> Result<Command, CommandError> {
        Err(CommandError::permission_denied("anything"))
    }
}

struct PanicsWhileProcessing;

#[async_trait]
impl Middleware for PanicsWhileProcessing {
    fn name(&self) -> &'static str {
        "exploding"
    }

    async fn process(&self, _command: Command) -> Result<Command, CommandError> {
        tokio::task::yield_now().await;
        panic!("middleware exploded");
    }
}

struct PanickingPermissions;

#[async_trait]
impl PermissionService for PanickingPermissions {
    async fn check_permission(
        &self,
        _user_id: &str,
        _command_name: &str,
    ) -> PermissionServiceResult<bool> {
        panic!("permission backend exploded");
    }
}

fn dispatcher_with(name: &str, handler: Arc<dyn CommandHandler>) -> Dispatcher {
    let registry = CommandRegistry::new()
        .with_handler(name, handler)
        .expect("registration should succeed");
    Dispatcher::new(MiddlewareChain::new(), registry)
}

fn command(name: &str) -> Command {
    Command::new(name, "user-1").expect("valid command")
}

#[rstest]
#[tokio::test]
async fn unknown_command_fails_without_raising() {
    let dispatcher = Dispatcher::new(MiddlewareChain::new(), CommandRegistry::new());

    let result = dispatcher.dispatch(command("dare.nope")).await;

    let error = result.error().expect("dispatch should fail");
    assert_eq!(error.kind(), CommandErrorKind::UnknownCommand);
    assert_eq!(error.message(), "unknown command: dare.nope");
}

#[rstest]
#[tokio::test]
async fn synchronous_handler_panic_becomes_failure() {
    let dispatcher = dispatcher_with("boom", Arc::new(PanicsImmediately));

    let result = dispatcher.dispatch(command("boom")).await;

    let error = result.error().expect("dispatch should fail");
    assert_eq!(error.kind(), CommandErrorKind::Internal);
    assert_eq!(error.cause(), Some("handler exploded"));
}

#[rstest]
#[tokio::test]
async fn asynchronous_handler_panic_becomes_failure() {
    let dispatcher = dispatcher_with("boom", Arc::new(PanicsAfterSuspending));

    let result = dispatcher.dispatch(command("boom")).await;

    assert!(!result.is_success());
    assert_eq!(
        result.error().and_then(CommandError::cause),
        Some("late failure")
    );
}

#[rstest]
#[tokio::test]
async fn handler_result_is_returned_unchanged() {
    let expected = CommandResult::fail(CommandError::validation("Dare ID is required"));
    let returned = expected.clone();
    let mut handler = MockCommandHandler::new();
    handler
        .expect_handle()
        .times(1)
        .returning(move |_| returned.clone());
    let dispatcher = dispatcher_with("dare.get", Arc::new(handler));

    let result = dispatcher.dispatch(command("dare.get")).await;

    assert_eq!(result, expected);
}

#[rstest]
#[tokio::test]
async fn middleware_rejection_skips_the_handler() {
    let mut handler = MockCommandHandler::new();
    handler.expect_handle().never();
    let registry = CommandRegistry::new()
        .with_handler("dare.get", Arc::new(handler))
        .expect("registration should succeed");
    let dispatcher = Dispatcher::new(MiddlewareChain::new().with(RejectsEverything), registry);

    let result = dispatcher.dispatch(command("dare.get")).await;

    assert_eq!(
        result.error().map(CommandError::kind),
        Some(CommandErrorKind::PermissionDenied)
    );
}

#[rstest]
#[tokio::test]
async fn handler_sees_enriched_command() {
    let registry = CommandRegistry::new()
        .with_handler("echo", Arc::new(EchoesMetadata))
        .expect("registration should succeed");
    let dispatcher = Dispatcher::new(MiddlewareChain::new().with(AddsLocale), registry);

    let result = dispatcher.dispatch(command("echo")).await;

    assert_eq!(result.display_message(), "locale: en-GB");
}

#[rstest]
#[tokio::test]
async fn middleware_panic_becomes_failure() {
    let mut handler = MockCommandHandler::new();
    handler.expect_handle().never();
    let registry = CommandRegistry::new()
        .with_handler("dare.get", Arc::new(handler))
        .expect("registration should succeed");
    let dispatcher = Dispatcher::new(MiddlewareChain::new().with(PanicsWhileProcessing), registry);

    let result = dispatcher.dispatch(command("dare.get")).await;

    let error = result.error().expect("dispatch should fail");
    assert_eq!(error.kind(), CommandErrorKind::Internal);
    assert_eq!(
        error.message(),
        "An unexpected error occurred while running dare.get"
    );
    assert_eq!(error.cause(), Some("middleware exploded"));
}

#[rstest]
#[tokio::test]
async fn permission_port_panic_becomes_failure() {
    let mut limiter = MockRateLimitService::new();
    limiter.expect_check_limit().never();
    let mut handler = MockCommandHandler::new();
    handler.expect_handle().never();
    let registry = CommandRegistry::new()
        .with_handler("dare.delete", Arc::new(handler))
        .expect("registration should succeed");
    let middleware = MiddlewareChain::new()
        .with(AuthorizationMiddleware::new(Arc::new(PanickingPermissions)))
        .with(RateLimitMiddleware::new(Arc::new(limiter)));
    let dispatcher = Dispatcher::new(middleware, registry);

    let result = dispatcher.dispatch(command("dare.delete")).await;

    assert!(!result.is_success());
    assert_eq!(
        result.error().and_then(CommandError::cause),
        Some("permission backend exploded")
    );
}
