//! Record table loading, column rewriting, and writing.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{IngestError, Result, csv_error};

/// An in-memory record table: a header row plus data rows of text cells.
///
/// The pipeline rewrites exactly one column; every other cell, the header
/// row, and row order round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordTable {
    /// Creates a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds a named column, case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Rewrites one column in place with `rewrite`, returning how many cells
    /// changed. Rows too short to have the column are left alone.
    pub fn rewrite_column<F>(&mut self, index: usize, mut rewrite: F) -> usize
    where
        F: FnMut(&str) -> String,
    {
        let mut changed = 0;
        for row in &mut self.rows {
            let Some(cell) = row.get_mut(index) else {
                continue;
            };
            let rewritten = rewrite(cell);
            if rewritten != *cell {
                *cell = rewritten;
                changed += 1;
            }
        }
        changed
    }
}

/// Loads a record table from a CSV file.
///
/// Headers are trimmed (including a BOM); data cells are kept verbatim, since
/// the normalizer owns all text cleanup.
pub fn load_records(path: &Path) -> Result<RecordTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, error))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| csv_error(path, error))?
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}').to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| csv_error(path, error))?;
        rows.push(record.iter().map(ToString::to_string).collect());
    }
    tracing::info!(
        path = %path.display(),
        records = rows.len(),
        columns = headers.len(),
        "loaded record table"
    );
    Ok(RecordTable::new(headers, rows))
}

/// Writes a record table to a CSV file.
pub fn write_records(path: &Path, table: &RecordTable) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, error))?;
    writer
        .write_record(table.headers())
        .map_err(|error| csv_error(path, error))?;
    for row in table.rows() {
        writer
            .write_record(row)
            .map_err(|error| csv_error(path, error))?;
    }
    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        records = table.len(),
        "wrote record table"
    );
    Ok(())
}
