//! Shared world state for command dispatch BDD scenarios.

use darebot::{
    bot::Bot,
    command::domain::{Command, CommandResult},
    config::BotConfig,
};
use rstest::fixture;

/// Admin user configured for every scenario bot.
pub const ADMIN: &str = "root";
/// Requests allowed per user and command in each window.
pub const REQUESTS_PER_WINDOW: u32 = 2;

/// Scenario world for command dispatch behaviour tests.
#[derive(Default)]
pub struct DispatchWorld {
    pub bot: Option<Bot>,
    pub last_result: Option<CommandResult>,
}

impl DispatchWorld {
    /// Returns the bot built by a `Given` step.
    pub fn bot(&self) -> eyre::Result<&Bot> {
        self.bot
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no bot in scenario world"))
    }

    /// Returns the result of the last `When` step.
    pub fn last_result(&self) -> eyre::Result<&CommandResult> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no command has been dispatched"))
    }

    /// Dispatches `command` and records the result.
    pub fn dispatch(&mut self, command: Command) -> eyre::Result<()> {
        let result = run_async(self.bot()?.dispatch(command));
        self.last_result = Some(result);
        Ok(())
    }
}

/// Configuration shared by every scenario bot.
pub fn scenario_config() -> BotConfig {
    let mut config = BotConfig::default();
    config.permissions.admins = vec![ADMIN.to_owned()];
    config.rate_limit.max_requests = REQUESTS_PER_WINDOW;
    config
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
