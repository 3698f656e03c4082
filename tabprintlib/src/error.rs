//! Error types for tabprintlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching, rendering or printing a table
#[derive(Error, Debug)]
pub enum PrintError {
    /// The command line did not carry the expected number of arguments
    #[error("incorrect number of parameters. Expected {expected}, but is {actual}")]
    InvalidArguments { expected: usize, actual: usize },

    /// Rows of one table disagree on their columns
    #[error("malformed table at row {row}: {reason}")]
    MalformedTable { row: usize, reason: String },

    /// Failed to read a data file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data document is not valid JSON
    #[error("invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    /// Data document is valid JSON but not shaped like a set of tables
    #[error("invalid table data: {0}")]
    InvalidData(String),

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
