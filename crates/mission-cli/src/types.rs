//! Shared result types for CLI commands.

use std::path::PathBuf;

/// Outcome of a `clean` run.
#[derive(Debug, Clone)]
pub struct CleanResult {
    /// Input CSV path.
    pub input: PathBuf,
    /// Output CSV path; `None` on a dry run.
    pub output: Option<PathBuf>,
    /// Name of the cleaned column.
    pub column: String,
    /// Number of records processed.
    pub records: usize,
    /// Number of records whose text changed.
    pub changed: usize,
    /// Number of glossary entries applied per record.
    pub glossary_entries: usize,
}
