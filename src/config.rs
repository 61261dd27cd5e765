//! Bot configuration.
//!
//! Configuration is read from a TOML file with four optional sections:
//!
//! ```toml
//! [generator]
//! base_url = "http://localhost:8080"
//! timeout_ms = 5000
//!
//! [rate_limit]
//! max_requests = 5
//! window_secs = 60
//!
//! [permissions]
//! admins = ["1234"]
//! restricted_commands = ["dare.delete", "quote.delete"]
//!
//! [logging]
//! filter = "info,darebot=debug"
//! json = false
//! ```
//!
//! Every field has a default, so an empty file is a valid configuration.
//! `DAREBOT_*` environment variables override file values.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Prefix shared by all environment overrides.
pub const ENV_PREFIX: &str = "DAREBOT_";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`BotConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment override could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidOverride {
        /// Variable name.
        name: String,
        /// Rejected value.
        value: String,
    },

    /// A parsed value is out of range.
    #[error("invalid config value {field}: {reason}")]
    Invalid {
        /// Dotted field path, e.g. `rate_limit.window_secs`.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    /// External content generator settings.
    pub generator: GeneratorConfig,
    /// Per-user, per-command rate limiting.
    pub rate_limit: RateLimitConfig,
    /// Admin list and restricted commands.
    pub permissions: PermissionsConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// External content generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Base URL of the generator service. Without it the bot runs offline
    /// and serves stored dares only.
    pub base_url: Option<String>,
    /// Bearer token sent to the generator.
    pub api_key: Option<String>,
    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
    /// Calls made before falling back to stored dares.
    pub attempts: u32,
    /// Pause between attempts in milliseconds.
    pub retry_delay_ms: u64,
    /// Theme used when a command names none.
    pub default_theme: String,
    /// Generator preset used when a command names none.
    pub default_generator: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_ms: 10_000,
            attempts: 1,
            retry_delay_ms: 250,
            default_theme: "general".to_owned(),
            default_generator: "default".to_owned(),
        }
    }
}

impl GeneratorConfig {
    /// Returns the per-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the pause between attempts.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

/// Fixed-window rate limit settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateLimitConfig {
    /// Requests allowed per window.
    pub max_requests: u32,
    /// Window length in seconds.
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window_secs: 60,
        }
    }
}

impl RateLimitConfig {
    /// Returns the window length.
    #[must_use]
    pub const fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

/// Permission rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermissionsConfig {
    /// User ids allowed to run restricted commands.
    pub admins: Vec<String>,
    /// Commands only admins may run.
    pub restricted_commands: Vec<String>,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            admins: Vec::new(),
            restricted_commands: vec!["dare.delete".to_owned(), "quote.delete".to_owned()],
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` takes
    /// precedence when set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            json: false,
        }
    }
}

impl BotConfig {
    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or any
    /// error from [`BotConfig::from_toml_str`].
    pub fn load(path: &Utf8Path) -> ConfigResult<Self> {
        let read_error = |source: std::io::Error| ConfigError::Read {
            path: path.to_string(),
            source,
        };
        let file_name = path.file_name().ok_or_else(|| {
            read_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path must include a file name",
            ))
        })?;
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `DAREBOT_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] when a numeric or boolean
    /// variable cannot be parsed.
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Applies `DAREBOT_*` overrides read through `lookup`.
    ///
    /// Recognised variables: `DAREBOT_GENERATOR_URL`,
    /// `DAREBOT_GENERATOR_API_KEY`, `DAREBOT_GENERATOR_TIMEOUT_MS`,
    /// `DAREBOT_RATE_LIMIT_MAX_REQUESTS`, `DAREBOT_RATE_LIMIT_WINDOW_SECS`,
    /// `DAREBOT_ADMINS` (comma separated), `DAREBOT_LOG` and
    /// `DAREBOT_LOG_JSON`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] when a value cannot be
    /// parsed, or [`ConfigError::Invalid`] when the result is out of range.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let var = |suffix: &str| {
            let name = format!("{ENV_PREFIX}{suffix}");
            lookup(&name).map(|value| (name, value))
        };

        if let Some((_, url)) = var("GENERATOR_URL") {
            self.generator.base_url = Some(url).filter(|value| !value.trim().is_empty());
        }
        if let Some((_, key)) = var("GENERATOR_API_KEY") {
            self.generator.api_key = Some(key);
        }
        if let Some((name, raw)) = var("GENERATOR_TIMEOUT_MS") {
            self.generator.timeout_ms = parse_override(name, &raw)?;
        }
        if let Some((name, raw)) = var("RATE_LIMIT_MAX_REQUESTS") {
            self.rate_limit.max_requests = parse_override(name, &raw)?;
        }
        if let Some((name, raw)) = var("RATE_LIMIT_WINDOW_SECS") {
            self.rate_limit.window_secs = parse_override(name, &raw)?;
        }
        if let Some((_, admins)) = var("ADMINS") {
            self.permissions.admins = admins
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .collect();
        }
        if let Some((_, filter)) = var("LOG") {
            self.logging.filter = filter;
        }
        if let Some((name, raw)) = var("LOG_JSON") {
            self.logging.json = parse_override(name, &raw)?;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> ConfigResult<()> {
        let checks = [
            (
                self.generator.timeout_ms == 0,
                "generator.timeout_ms",
                "must be greater than zero",
            ),
            (
                self.generator.attempts == 0,
                "generator.attempts",
                "must be greater than zero",
            ),
            (
                self.generator.default_theme.trim().is_empty(),
                "generator.default_theme",
                "must not be empty",
            ),
            (
                self.rate_limit.max_requests == 0,
                "rate_limit.max_requests",
                "must be greater than zero",
            ),
            (
                self.rate_limit.window_secs == 0,
                "rate_limit.window_secs",
                "must be greater than zero",
            ),
        ];
        checks
            .into_iter()
            .find(|(failed, _, _)| *failed)
            .map_or(Ok(()), |(_, field, reason)| {
                Err(ConfigError::Invalid { field, reason })
            })
    }
}

fn parse_override<T: std::str::FromStr>(name: String, raw: &str) -> ConfigResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidOverride {
            name,
            value: raw.to_owned(),
        })
}
