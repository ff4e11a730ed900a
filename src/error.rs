//! Error types for selector validation and dataset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected city, month or day selection.
///
/// The CLI shell recovers from these by asking again; they never abort a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("unknown city '{0}' (expected chicago, new york city or washington)")]
    InvalidCity(String),

    #[error("unknown month '{0}' (expected all or january through june)")]
    InvalidMonth(String),

    #[error("unknown day '{0}' (expected all or monday through sunday)")]
    InvalidDay(String),
}

/// Failure to turn a city's trip source into a [`Dataset`](crate::record::Dataset).
///
/// Every variant is fatal for the query that triggered it.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("trip data source not found or unreadable: {path}: {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("trip data source has no header row")]
    MissingHeader,

    #[error("required column '{column}' is missing")]
    MissingColumn { column: &'static str },

    #[error("line {line}: cannot parse start time '{value}'")]
    UnparseableTimestamp { line: u64, value: String },

    #[error("line {line}: invalid value '{value}' in column '{column}'")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;
