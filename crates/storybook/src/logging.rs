//! Tracing subscriber setup shared by both binaries.

use std::env;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Set to `1` or `true` for JSON log lines.
pub const JSON_LOGS_ENV: &str = "STORYBOOK_JSON_LOGS";

/// How log output is filtered and formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info")
    pub log_level: String,
    /// Ignore `RUST_LOG` and use `log_level`
    pub force_level: bool,
    /// Emit JSON-formatted logs
    pub json_logs: bool,
}

impl LoggingConfig {
    /// Configuration from the environment, raised to debug when `verbose`.
    pub fn from_env(verbose: bool) -> Self {
        let json_logs = env::var(JSON_LOGS_ENV)
            .map(|value| matches!(value.trim(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);
        Self::default().with_verbose(verbose).with_json_logs(json_logs)
    }

    /// Force debug output regardless of `RUST_LOG`.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log_level = "debug".to_string();
            self.force_level = true;
        }
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    fn filter(&self) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
        if self.force_level {
            EnvFilter::try_new(&self.log_level)
        } else {
            EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&self.log_level))
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            force_level: false,
            json_logs: false,
        }
    }
}

/// Install the global tracing subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = config.filter()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
