//! Diagnostic logging for summe.
//!
//! Log output goes to stderr only; stdout carries nothing but the report.
//! Verbosity comes from the `SUMME_LOG` environment variable, which accepts any
//! `tracing_subscriber::EnvFilter` directive (`debug`, `summe_core=trace`, ...).

use once_cell::sync::OnceCell;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{BenchError, BenchResult};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SUMME_LOG";

const DEFAULT_LEVEL: &str = "warn";

static LOGGER_INSTANCE: OnceCell<LoggingConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Default config with the level taken from `SUMME_LOG` when set.
    pub fn from_env() -> Self {
        Self::from_level(std::env::var(LOG_ENV).ok())
    }

    fn from_level(level: Option<String>) -> Self {
        match level {
            Some(level) if !level.trim().is_empty() => Self { level },
            _ => Self::default(),
        }
    }

    /// Filter for this config; an unparsable directive falls back to `warn`.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

/// Installs the global stderr subscriber. Later calls are no-ops and return the
/// config that won.
pub fn init(config: LoggingConfig) -> BenchResult<&'static LoggingConfig> {
    let installed = LOGGER_INSTANCE.get_or_try_init(|| -> BenchResult<LoggingConfig> {
        setup_tracing_subscriber(&config)?;
        Ok(config)
    })?;
    debug!(level = %installed.level, "logging initialized");
    Ok(installed)
}

fn setup_tracing_subscriber(config: &LoggingConfig) -> BenchResult<()> {
    tracing_subscriber::registry()
        .with(config.filter())
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| BenchError::Logging(e.to_string()))
}
