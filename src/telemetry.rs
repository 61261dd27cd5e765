//! Structured logging setup.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over [`LoggingConfig::filter`]; an unparsable filter
/// falls back to `info`. Events go to standard error so they never mix
/// with console output. Calling this more than once is harmless: later
/// calls leave the first subscriber in place and return `false`.
#[must_use = "returns whether this call installed the subscriber"]
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn second_initialisation_is_a_no_op() {
        let config = LoggingConfig::default();
        let _first = init(&config);

        assert!(!init(&config));
    }
}
