use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("invalid log level {level:?}: {source}")]
    Filter {
        level: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("log file {0} has no file name")]
    NoFileName(PathBuf),
    #[error("could not open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: tracing_appender::rolling::InitError,
    },
    #[error("could not install log subscriber: {0}")]
    Init(String),
}

/// Parse an `EnvFilter` directive such as `info` or `todo=debug`
pub fn parse_filter(level: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(level).map_err(|e| LogError::Filter {
        level: level.to_string(),
        source: e,
    })
}

/// Install the global subscriber writing to `file`. The terminal belongs to
/// the UI, so with no file nothing is installed and events are dropped.
/// `level` is validated either way. Returns whether logging was enabled.
pub fn init_logging(file: Option<&Path>, level: &str) -> Result<bool, LogError> {
    let filter = parse_filter(level)?;
    let Some(path) = file else {
        return Ok(false);
    };
    let name = path
        .file_name()
        .ok_or_else(|| LogError::NoFileName(path.to_path_buf()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy().into_owned())
        .build(dir)
        .map_err(|e| LogError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LogError::Init(e.to_string()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter("info").is_ok());
        assert!(parse_filter("todo=debug,warn").is_ok());
        let err = parse_filter("todo=loud").unwrap_err();
        assert!(err.to_string().starts_with("invalid log level \"todo=loud\""));
    }

    #[test]
    fn test_no_file_means_no_logging() {
        assert!(!init_logging(None, "info").unwrap());
    }

    #[test]
    fn test_invalid_level_without_file() {
        let err = init_logging(None, "todo=loud").unwrap_err();
        assert!(matches!(err, LogError::Filter { .. }));
    }

    #[test]
    fn test_path_without_file_name() {
        let err = init_logging(Some(Path::new("/")), "info").unwrap_err();
        assert!(matches!(err, LogError::NoFileName(_)));
    }
}
