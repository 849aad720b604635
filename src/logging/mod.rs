//! Tracing subscriber initialization for host applications.
//!
//! The engine emits `tracing` events (configuration replacement, planned
//! scrolls, section resyncs) but never installs a subscriber itself. Hosts
//! that want those events on disk call [`init`] once at startup; logs go to
//! a file so they can be watched with `tail -f` without disturbing the UI
//! surface the host renders into.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Logging initialization failure.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log path does not name a file inside a directory.
    #[error("log path must name a file inside a directory: {0:?}")]
    InvalidPath(PathBuf),

    /// Failed to create the log directory.
    #[error("failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize file-based logging.
///
/// Creates the parent directory if missing. Respects `RUST_LOG`, defaulting
/// to `info`. ANSI colors are disabled since the output is a file.
///
/// # Errors
///
/// [`LoggingError`] when the path does not name a file, the directory cannot
/// be created, or a global subscriber is already set.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = match (log_path.parent(), log_path.file_name()) {
        (Some(directory), Some(file_name)) => (directory, file_name),
        _ => return Err(LoggingError::InvalidPath(log_path.to_path_buf())),
    };
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("listwindow_test_logs_create");
        let log_file = test_dir.join("test.log");
        let _ = fs::remove_dir_all(&test_dir);

        // Directory creation happens even when the global subscriber was
        // already installed by another test.
        let _ = init(&log_file);

        assert!(test_dir.exists(), "log directory should exist: {:?}", test_dir);
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn init_succeeds_when_directory_already_exists() {
        let test_dir = std::env::temp_dir().join("listwindow_test_logs_exists");
        let log_file = test_dir.join("test.log");
        fs::create_dir_all(&test_dir).unwrap();

        match init(&log_file) {
            Ok(()) | Err(LoggingError::SubscriberAlreadySet) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn init_rejects_path_without_filename() {
        // `..` has no filename component.
        let result = init(Path::new(".."));
        assert!(matches!(
            result,
            Err(LoggingError::InvalidPath(_)) | Err(LoggingError::SubscriberAlreadySet)
        ));
    }
}
