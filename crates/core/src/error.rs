//! Error types for sched-report-core

use crate::data::{Category, Scheduler, Series};
use thiserror::Error;

/// Result type alias for sched-report-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while extracting, aggregating or rendering results
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {field} value '{value}' in benchmark log")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Missing {series} {category} measurement for the {scheduler} scheduler")]
    MissingMeasurement {
        scheduler: Scheduler,
        category: Category,
        series: Series,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl Error {
    /// Whether this error is a read of a file that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::FileReadError { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
