//! Tracing subscriber initialization.
//!
//! The browser owns the terminal while it runs, so logs go to a file.
//! Follow them with `tail -f` from another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaulting to [`DEFAULT_FILTER`]. Key dispatch is
/// logged at `debug`, so `RUST_LOG=conbrowse=debug` traces every keypress.
/// An unparsable `RUST_LOG` falls back to the default and is reported as the
/// first line of the log.
///
/// Creates the log directory if it doesn't exist.
///
/// # Errors
///
/// Fails if the directory cannot be created, the path has no file name,
/// or a global subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let file_name = log_path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let requested = std::env::var("RUST_LOG").ok();
    let (filter, rejected) = resolve_filter(requested.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;

    if let Some(directives) = rejected {
        tracing::warn!(
            directives = %directives,
            fallback = DEFAULT_FILTER,
            "Ignoring unparsable RUST_LOG"
        );
    }
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        path = %log_path.display(),
        "Logging started"
    );
    Ok(())
}

/// Filter for `requested` directives, plus the directives themselves when
/// they had to be replaced by [`DEFAULT_FILTER`].
fn resolve_filter(requested: Option<&str>) -> (EnvFilter, Option<String>) {
    match requested.map(str::trim).filter(|d| !d.is_empty()) {
        None => (EnvFilter::new(DEFAULT_FILTER), None),
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(filter) => (filter, None),
            Err(_) => (EnvFilter::new(DEFAULT_FILTER), Some(directives.to_string())),
        },
    }
}
