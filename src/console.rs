//! Line-oriented console front end.
//!
//! Each input line names the invoking user, the command and optional
//! `key=value` arguments:
//!
//! ```text
//! alice dare.create theme=party
//! alice quote.add text="Stay hungry" author=Jobs
//! bob dare.get id=3
//! ```
//!
//! Values that parse as JSON scalars (numbers, booleans) keep that type;
//! anything else is a string. Double quotes group words. Blank lines and
//! lines starting with `#` are skipped. Every dispatched command produces
//! one JSON envelope line on the output.

use serde_json::Value;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::bot::Bot;
use crate::command::domain::{Command, CommandDomainError, CommandError, CommandResult};

/// Errors raised while parsing one console line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsoleError {
    /// The line names a user but no command.
    #[error("expected `<user> <command> [key=value ...]`")]
    MissingCommand,

    /// A double quote was opened but never closed.
    #[error("unterminated quote")]
    UnterminatedQuote,

    /// An argument lacks `=` or has an empty key.
    #[error("invalid argument '{0}', expected key=value")]
    InvalidArgument(String),

    /// The user id or command name was rejected.
    #[error(transparent)]
    Command(#[from] CommandDomainError),
}

/// Parses one console line. Returns `None` for blank and comment lines.
///
/// # Errors
///
/// Returns [`ConsoleError`] when the line is malformed.
pub fn parse_line(line: &str) -> Result<Option<Command>, ConsoleError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed)?;
    let mut words = tokens.into_iter();
    let (Some(user_id), Some(name)) = (words.next(), words.next()) else {
        return Err(ConsoleError::MissingCommand);
    };

    let arguments = words
        .map(|word| {
            let (key, raw) = word
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| ConsoleError::InvalidArgument(word.clone()))?;
            Ok((key.to_owned(), scalar(raw)))
        })
        .collect::<Result<Vec<_>, ConsoleError>>()?;

    Ok(Some(Command::new(name, user_id)?.with_arguments(arguments)))
}

fn tokenize(line: &str) -> Result<Vec<String>, ConsoleError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if quoted {
        return Err(ConsoleError::UnterminatedQuote);
    }
    if pending {
        tokens.push(current);
    }
    Ok(tokens)
}

fn scalar(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Number(_) | Value::Bool(_))) => value,
        _ => Value::String(raw.to_owned()),
    }
}

/// Reads commands from `input` until end of file and writes one JSON result
/// per dispatched command to `output`.
///
/// Parse errors are reported as failed results with kind `validation`.
///
/// # Errors
///
/// Returns I/O errors from reading `input` or writing `output`.
pub async fn run<I, O>(bot: &Bot, input: I, mut output: O) -> std::io::Result<()>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let result = match parse_line(&line) {
            Ok(Some(command)) => bot.dispatch(command).await,
            Ok(None) => continue,
            Err(error) => CommandResult::fail(CommandError::validation(error.to_string())),
        };
        let encoded = serde_json::to_string(&result).map_err(std::io::Error::other)?;
        output.write_all(encoded.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}
