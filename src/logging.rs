//! Tracing subscriber setup for embedders

use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::LoggingError;

/// Default filter directive when none is configured
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `firefox_client=debug`
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

/// Install a global subscriber. Fails if one is already installed.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().finish().try_init()?;
    } else {
        builder.finish().try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn log_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<LogConfig>(json!({ "json": true })).unwrap();

        assert_eq!(
            result,
            LogConfig {
                filter: "info".to_string(),
                json: true,
            }
        );
    }

    #[test]
    fn init_rejects_invalid_filter() {
        let config = LogConfig {
            filter: "firefox_client=notalevel".to_string(),
            json: false,
        };

        assert!(matches!(init(&config), Err(LoggingError::Filter(_))));
    }

    #[test]
    fn init_twice_is_an_error() {
        let config = LogConfig {
            filter: "firefox_client=debug".to_string(),
            json: true,
        };

        // Another test binary may have installed one already
        let _ = init(&config);

        assert!(matches!(init(&config), Err(LoggingError::Init(_))));
    }
}
