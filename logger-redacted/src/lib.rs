//! Logging setup with identifier redaction for the ClaimsDesk engine
//!
//! Policy numbers, national id numbers, phone numbers and e-mail addresses
//! appear in the records the engine evaluates. None of them may reach a log
//! line in clear text, so services run identifiers through [`PiiRedactor`]
//! before recording them as `tracing` fields.
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{init_logging, LoggerConfig, PiiRedactor};
//!
//! let _guard = init_logging(&LoggerConfig::default())?;
//! let redactor = PiiRedactor::default();
//! tracing::info!(policy = %redactor.mask_identifier("POL-778812"), "Policy loaded");
//! // policy=******8812
//! # Ok::<(), logger_redacted::LoggerError>(())
//! ```

pub mod redactor;
pub mod config;

pub use redactor::*;
pub use config::*;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.level` when set. Events are written to
/// stderr through a non-blocking writer; keep the returned guard alive
/// until shutdown so buffered lines are flushed.
pub fn init_logging(config: &LoggerConfig) -> Result<WorkerGuard, LoggerError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| LoggerError::InvalidFilter(format!("{}: {}", config.level, e)))?,
    };

    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let result = if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(writer)
                    .json(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_level(true)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;
    tracing::debug!(
        level = %config.level,
        json = config.json,
        redaction = config.redaction_enabled,
        "Logging initialized"
    );
    Ok(guard)
}

/// Redactor matching the logging configuration.
pub fn redactor_for(config: &LoggerConfig) -> PiiRedactor {
    if config.redaction_enabled {
        PiiRedactor::default()
    } else {
        PiiRedactor::new(RedactionConfig::disabled())
    }
}
