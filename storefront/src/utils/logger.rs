//! Logging Infrastructure
//!
//! Structured logging setup for the storefront binary: stderr by default,
//! daily rolling file when a log directory is configured.

use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// File name prefix of the daily rolling log
pub const LOG_FILE_PREFIX: &str = "storefront";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Daily rolling file inside this directory
    File(PathBuf),
    /// Standard error; stdout carries the rendered cart
    Stderr,
}

impl LogTarget {
    /// A directory that does not exist falls back to stderr
    pub fn resolve(log_dir: Option<&str>) -> Self {
        match log_dir.map(Path::new) {
            Some(path) if path.is_dir() => LogTarget::File(path.to_path_buf()),
            _ => LogTarget::Stderr,
        }
    }
}

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("storefront={level},shared={level}")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match LogTarget::resolve(log_dir) {
        LogTarget::File(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let _ = subscriber.with_writer(file_appender).try_init();
        }
        LogTarget::Stderr => {
            let _ = subscriber.with_writer(std::io::stderr).try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target_is_stderr() {
        assert_eq!(LogTarget::resolve(None), LogTarget::Stderr);
    }

    #[test]
    fn test_existing_dir_gets_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        assert_eq!(
            LogTarget::resolve(Some(path)),
            LogTarget::File(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_missing_dir_falls_back_to_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(
            LogTarget::resolve(missing.to_str()),
            LogTarget::Stderr
        );
    }
}
