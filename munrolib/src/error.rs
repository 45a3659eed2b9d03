//! Error types for munrolib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying the Munro tables
#[derive(Error, Debug)]
pub enum MunroError {
    /// A minimum height bound exceeds the maximum height bound
    #[error("invalid height range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: f64, max: f64 },

    /// A height bound is NaN or infinite
    #[error("invalid height bound: {0}")]
    InvalidHeight(f64),

    /// Failed to read the dataset
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV stream could not be read
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization of results failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Not one of MUN or TOP
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Not a field results can be sorted by
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    /// Not a direction results can be sorted in
    #[error("unknown sort direction: {0} (expected asc or desc)")]
    UnknownSortDirection(String),

    /// A record that is missing a field or has an impossible height
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
