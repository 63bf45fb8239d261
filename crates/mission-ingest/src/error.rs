//! Error types for CSV ingestion.

use std::path::PathBuf;

use mission_model::GlossaryError;
use thiserror::Error;

/// Errors that can occur while loading or writing tabular data.
///
/// All of these are configuration-level failures raised before any record is
/// processed; there is no per-record failure mode.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Glossary table failed validation.
    #[error("invalid glossary table {path}: {source}")]
    InvalidGlossary {
        path: PathBuf,
        #[source]
        source: GlossaryError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Maps a `csv::Error` to the ingestion taxonomy, surfacing missing files
/// distinctly from parse failures.
pub(crate) fn csv_error(path: &std::path::Path, error: csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = error.kind() {
        if io.kind() == std::io::ErrorKind::NotFound {
            return IngestError::FileNotFound {
                path: path.to_path_buf(),
            };
        }
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source: error,
    }
}
