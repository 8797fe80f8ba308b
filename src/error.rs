//! Error types for loading and filtering trip data.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, BikeshareError>;

#[derive(Error, Debug)]
pub enum BikeshareError {
    /// City selector is not one of the supported cities.
    #[error("Unknown city '{0}'. Expected one of: chicago, new york city, washington.")]
    UnknownCity(String),

    /// Month selector is neither "all" nor one of the supported months.
    #[error("Unknown month '{0}'. Expected \"all\" or one of: january .. june.")]
    UnknownMonth(String),

    /// Day selector is neither "all" nor a weekday name.
    #[error("Unknown day '{0}'. Expected \"all\" or a weekday name such as monday.")]
    UnknownDay(String),

    /// A row could not be parsed. The whole load is aborted.
    #[error("Malformed record in '{}' at line {line}: {reason}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// The source file is missing a column every city must provide.
    #[error("Source '{}' is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl BikeshareError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, line: u64, reason: impl Into<String>) -> Self {
        BikeshareError::MalformedRecord {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}
