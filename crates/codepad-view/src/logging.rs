#![forbid(unsafe_code)]

//! `tracing-subscriber` bootstrap for binaries embedding the view.
//!
//! Library code only emits events; nothing here runs unless the host calls
//! [`init_logging`] or [`init_from_env`]. Installation never clobbers an
//! existing global subscriber.

use std::env;
use std::fmt;

use tracing_subscriber::EnvFilter;

/// Env var holding an `EnvFilter` directive string.
pub const ENV_LOG: &str = "CODEPAD_LOG";

/// Filter used when [`ENV_LOG`] is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Errors from installing the global subscriber.
#[derive(Debug)]
pub enum LoggingError {
    /// The filter directive did not parse.
    InvalidFilter { filter: String, message: String },
    /// A global subscriber is already installed.
    SubscriberAlreadySet,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilter { filter, message } => {
                write!(f, "invalid log filter {filter:?}: {message}")
            }
            Self::SubscriberAlreadySet => write!(f, "a global tracing subscriber is already set"),
        }
    }
}

impl std::error::Error for LoggingError {}

/// Install a fmt subscriber writing to stderr with the given filter.
pub fn init_logging(filter: &str) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|err| LoggingError::InvalidFilter {
        filter: filter.to_owned(),
        message: err.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;
    tracing::debug!(filter, "logging initialized");
    Ok(())
}

/// Install a subscriber filtered by `CODEPAD_LOG` (default `warn`).
pub fn init_from_env() -> Result<(), LoggingError> {
    let filter = env::var(ENV_LOG).unwrap_or_else(|_| DEFAULT_FILTER.to_owned());
    init_logging(&filter)
}
