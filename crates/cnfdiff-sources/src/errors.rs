//! Error handling for cnfdiff-sources
//!
//! Wraps cnfdiff-core ExError with adapter-specific helpers

use cnfdiff_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an error for a file that could not be read
pub fn io_error(path: &Path, err: std::io::Error) -> ExError {
    let kind = if err.kind() == std::io::ErrorKind::NotFound {
        ExErrorKind::NotFound
    } else {
        ExErrorKind::Io
    };
    ExError::new(kind)
        .with_op("read_cnf")
        .with_source_name(path.display().to_string())
        .with_message(err.to_string())
}

/// Create an option-file syntax error
pub fn cnf_syntax(path: &Path, line: usize, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidCnf)
        .with_op("read_cnf")
        .with_source_name(path.display().to_string())
        .with_line(line)
        .with_message(reason.to_string())
}

/// Create a DSN parse error
pub fn invalid_dsn(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidDsn)
        .with_op("parse_dsn")
        .with_message(reason.to_string())
}

/// Create a connection error
pub fn connection_error(target: &str, err: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Connection)
        .with_op("connect")
        .with_source_name(target.to_string())
        .with_message(err.to_string())
}

/// Create a connect timeout error
pub fn timeout_error(target: &str, secs: u64) -> ExError {
    ExError::new(ExErrorKind::Timeout)
        .with_op("connect")
        .with_source_name(target.to_string())
        .with_message(format!("no connection after {}s", secs))
}

/// Create a query error
pub fn query_error(target: &str, err: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Query)
        .with_op("show_variables")
        .with_source_name(target.to_string())
        .with_message(err.to_string())
}
