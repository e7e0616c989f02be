//! Logging setup shared by the Shortify binaries.

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, one line per event.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to install log bridge: {0}")]
    LogBridge(#[from] tracing_log::log::SetLoggerError),
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),
}

/// Installs the global tracing subscriber.
///
/// Events are filtered by `RUST_LOG` (falling back to [`DEFAULT_FILTER`]),
/// and records emitted through the `log` crate are forwarded to tracing.
/// Can only succeed once per process.
pub fn init(format: LogFormat) -> Result<(), TelemetryError> {
    LogTracer::init()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    }
    .map_err(|e| TelemetryError::Subscriber(e.to_string()))?;

    tracing::debug!(?format, "telemetry initialized");
    Ok(())
}
