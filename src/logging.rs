//! Tracing subscriber setup for the `flip-qubit` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the executable (or to tests that want to see the events).

use crate::core::QubitError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// How the global subscriber should behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Directive used when `RUST_LOG` is unset (e.g. `warn`, `qflip=debug`).
    pub default_directive: String,
    /// Colorize output.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { default_directive: "warn".to_string(), ansi: true }
    }
}

impl LoggingConfig {
    /// Default configuration, raised to `debug` when `verbose` is set.
    pub fn for_verbosity(verbose: bool) -> Self {
        let default_directive = if verbose { "debug" } else { "warn" };
        Self { default_directive: default_directive.to_string(), ..Self::default() }
    }

    /// Resolve the `EnvFilter`: `RUST_LOG` wins, otherwise the default directive.
    fn resolve_filter(&self) -> Result<EnvFilter, QubitError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => self.default_filter(),
        }
    }

    /// Parse `default_directive` on its own, ignoring the environment.
    fn default_filter(&self) -> Result<EnvFilter, QubitError> {
        EnvFilter::try_new(&self.default_directive).map_err(|err| QubitError::Logging {
            message: format!("invalid tracing directive '{}': {}", self.default_directive, err),
        })
    }
}

/// Install a stderr `fmt` subscriber as the process-wide default.
///
/// # Errors
/// `QubitError::Logging` if the directive is invalid or a global subscriber
/// is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), QubitError> {
    let filter = config.resolve_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
        .map_err(|err| QubitError::Logging {
            message: format!("failed to install global tracing subscriber: {}", err),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directive() {
        assert_eq!(LoggingConfig::for_verbosity(false).default_directive, "warn");
        assert_eq!(LoggingConfig::for_verbosity(true).default_directive, "debug");
    }

    #[test]
    fn test_invalid_directive_is_reported() {
        let config =
            LoggingConfig { default_directive: "qflip=notalevel".to_string(), ansi: false };
        assert!(matches!(config.default_filter(), Err(QubitError::Logging { .. })));
    }

    #[test]
    fn test_valid_directive_parses() {
        let config =
            LoggingConfig { default_directive: "qflip=debug,warn".to_string(), ansi: false };
        assert!(config.default_filter().is_ok());
    }

    #[test]
    fn test_second_install_is_reported() {
        // The only test in this binary that installs a global subscriber.
        let config = LoggingConfig { ansi: false, ..LoggingConfig::default() };
        assert_eq!(init_tracing(&config), Ok(()));
        match init_tracing(&config) {
            Err(QubitError::Logging { message }) => {
                assert!(message.starts_with("failed to install global tracing subscriber"));
            }
            other => panic!("expected Logging error, got {:?}", other),
        }
    }
}
