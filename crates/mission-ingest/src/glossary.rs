//! Glossary table loading.

use std::path::Path;

use csv::ReaderBuilder;

use mission_model::Glossary;

use crate::error::{IngestError, Result, csv_error};

/// Normalizes a header or cell value by trimming whitespace and a BOM.
fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Finds a named column in the header row, case-insensitively.
fn find_column(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| normalize_cell(header).eq_ignore_ascii_case(name))
        .ok_or_else(|| IngestError::MissingColumn {
            column: name.to_string(),
            path: path.to_path_buf(),
        })
}

/// Loads the correction table from a CSV file.
///
/// The header row must name `word` and `fix` columns (extra columns are
/// ignored). Row order is preserved exactly; it defines correction priority.
///
/// # Errors
///
/// Fails on unreadable or unparseable files, missing required columns, or any
/// row with an empty word or fix. Nothing is processed against a table that
/// fails here.
pub fn load_glossary(path: &Path) -> Result<Glossary> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, error))?;

    let headers = reader
        .headers()
        .map_err(|error| csv_error(path, error))?
        .clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let word_index = find_column(&headers, "word", path)?;
    let fix_index = find_column(&headers, "fix", path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| csv_error(path, error))?;
        // A short row yields empty cells, rejected below as a malformed entry.
        let word = record.get(word_index).unwrap_or("");
        let fix = record.get(fix_index).unwrap_or("");
        rows.push((
            normalize_cell(word).to_string(),
            normalize_cell(fix).to_string(),
        ));
    }

    let glossary = Glossary::from_rows(rows).map_err(|source| IngestError::InvalidGlossary {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        entries = glossary.len(),
        "loaded glossary table"
    );
    Ok(glossary)
}
