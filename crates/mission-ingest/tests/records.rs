//! Integration tests for record table round-tripping.

use std::fs;
use std::path::PathBuf;

use mission_ingest::{IngestError, load_records, write_records};
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_records_keeps_cells_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "missions.csv",
        "ein,mission\n42,\"  Feed the hungry, daily.  \"\n43,Shelter\n",
    );

    let table = load_records(&path).unwrap();

    assert_eq!(table.headers(), ["ein", "mission"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0][1], "  Feed the hungry, daily.  ");
}

#[test]
fn test_untouched_columns_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(
        &dir,
        "missions.csv",
        "ein,mission,city\n42,Feed the hungry,Austin\n43,Shelter,Dallas\n",
    );
    let output = dir.path().join("out.csv");

    let mut table = load_records(&input).unwrap();
    let index = table.column_index("mission").unwrap();
    table.rewrite_column(index, str::to_uppercase);
    write_records(&output, &table).unwrap();

    let reloaded = load_records(&output).unwrap();
    assert_eq!(reloaded.headers(), ["ein", "mission", "city"]);
    assert_eq!(reloaded.rows()[0], ["42", "FEED THE HUNGRY", "Austin"]);
    assert_eq!(reloaded.rows()[1], ["43", "SHELTER", "Dallas"]);
}

#[test]
fn test_empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "missions.csv", "");

    let err = load_records(&path).unwrap_err();

    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.csv");

    let err = load_records(&path).unwrap_err();

    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
