//! Runs Darebot as a console application.
//!
//! Usage:
//!
//! ```text
//! darebot [config-path]
//! ```
//!
//! Without a path the built-in defaults are used. `DAREBOT_*` environment
//! variables override either. Commands are read from standard input, one
//! per line, and each result is written to standard output as JSON. See
//! [`darebot::console`] for the line format.

use camino::Utf8PathBuf;
use darebot::bot::{Bot, BotError};
use darebot::config::{BotConfig, ConfigError, LoggingConfig};
use std::process::ExitCode;
use thiserror::Error;
use tokio::io::BufReader;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Bot(#[from] BotError),
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _installed = darebot::telemetry::init(&LoggingConfig::default());
            tracing::error!(error = %err, "darebot stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => BotConfig::load(&Utf8PathBuf::from(path))?,
        None => BotConfig::default(),
    }
    .with_env_overrides()?;

    if !darebot::telemetry::init(&config.logging) {
        tracing::debug!("tracing subscriber already installed");
    }

    let bot = Bot::from_config(config)?;
    let input = BufReader::new(tokio::io::stdin());
    darebot::console::run(&bot, input, tokio::io::stdout()).await?;
    Ok(())
}
