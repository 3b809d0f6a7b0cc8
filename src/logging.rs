//! Structured logging setup.
//!
//! The list and export commands log to stderr. The viewer owns the terminal,
//! so it logs only when a log file is configured.

use std::sync::Mutex;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::fmt::format::{Compact, DefaultFields, Format};

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error.
    Stderr,
    /// Appends to the file at the given path.
    File(&'a Utf8Path),
    /// No subscriber is installed.
    Disabled,
}

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log level/filter '{value}': {source}")]
    EnvFilter {
        /// Rejected directive.
        value: String,
        /// Parser failure.
        source: ParseError,
    },
    /// The log file could not be opened.
    #[error("failed to open log file '{path}': {source}")]
    LogFile {
        /// Requested log file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Builds the filter: `RUST_LOG` wins, otherwise `log_level` applies.
///
/// # Errors
///
/// Returns [`LoggingError::EnvFilter`] when `log_level` cannot be parsed.
pub fn env_filter(log_level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(log_level).map_err(|source| LoggingError::EnvFilter {
            value: log_level.to_owned(),
            source,
        })
    })
}

/// Installs the global `tracing` subscriber for `target`.
///
/// # Errors
///
/// Returns an error when the filter is invalid, the log file cannot be
/// opened, or a subscriber is already installed.
pub fn init(log_level: &str, target: LogTarget<'_>) -> Result<(), LoggingError> {
    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => compact_builder(log_level)?
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let builder = compact_builder(log_level)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?))
                .try_init()
        }
    };
    result.map_err(|error| LoggingError::Subscriber(error.to_string()))
}

type CompactBuilder = SubscriberBuilder<DefaultFields, Format<Compact>, EnvFilter>;

fn compact_builder(log_level: &str) -> Result<CompactBuilder, LoggingError> {
    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_target(false)
        .compact())
}

fn open_log_file(path: &Utf8Path) -> Result<std::fs::File, LoggingError> {
    let log_file_error = |source| LoggingError::LogFile {
        path: path.to_string(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        log_file_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path has no file name",
        ))
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(log_file_error)?;
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    let file = dir.open_with(file_name, &options).map_err(log_file_error)?;
    Ok(file.into_std())
}
