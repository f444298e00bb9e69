//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and normalizing one result file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot read result file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid literal for integer field '{field}': '{value}'")]
    InvalidInteger {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Run-level conditions raised while building the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Directory {0} not found")]
    DirectoryNotFound(PathBuf),

    #[error("No result files found in {0}")]
    NoFilesFound(PathBuf),

    #[error("No valid data processed ({failed} file(s) failed)")]
    NoValidRecords { failed: usize },

    #[error("Invalid discovery pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Empty dataset, nothing to plot")]
    EmptyDataset,

    #[error("Unknown chart theme: {0}")]
    UnknownTheme(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
