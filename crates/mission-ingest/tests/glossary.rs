//! Integration tests for glossary table loading.

use std::fs;
use std::path::PathBuf;

use mission_ingest::{IngestError, load_glossary};
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_glossary_preserves_row_order() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "glossary.csv", "word,fix\nteh,the\nrecieve,receive\n");

    let glossary = load_glossary(&path).unwrap();

    assert_eq!(glossary.len(), 2);
    assert_eq!(glossary.entries()[0].word(), " teh ");
    assert_eq!(glossary.entries()[0].fix(), " the ");
    assert_eq!(glossary.entries()[1].word(), " recieve ");
}

#[test]
fn test_load_glossary_pads_multi_token_entries() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "glossary.csv",
        "word,fix\nunder - represented,underrepresented\n",
    );

    let glossary = load_glossary(&path).unwrap();

    assert_eq!(glossary.entries()[0].word(), " under - represented ");
    assert_eq!(glossary.entries()[0].fix(), " underrepresented ");
}

#[test]
fn test_load_glossary_ignores_extra_columns_and_header_case() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "glossary.csv",
        "index,Word,FIX,note\n0,teh,the,common typo\n",
    );

    let glossary = load_glossary(&path).unwrap();

    assert_eq!(glossary.len(), 1);
    assert_eq!(glossary.entries()[0].word(), " teh ");
    assert_eq!(glossary.entries()[0].fix(), " the ");
}

#[test]
fn test_missing_fix_column_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "glossary.csv", "word,replacement\nteh,the\n");

    let err = load_glossary(&path).unwrap_err();

    assert!(matches!(err, IngestError::MissingColumn { column, .. } if column == "fix"));
}

#[test]
fn test_empty_fix_cell_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "glossary.csv", "word,fix\nteh,the\nbroken,\n");

    let err = load_glossary(&path).unwrap_err();

    assert!(matches!(err, IngestError::InvalidGlossary { .. }));
    assert!(err.to_string().contains("invalid glossary table"));
}

#[test]
fn test_short_row_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "glossary.csv", "word,fix\nonly-word\n");

    let err = load_glossary(&path).unwrap_err();

    assert!(matches!(err, IngestError::InvalidGlossary { .. }));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.csv");

    let err = load_glossary(&path).unwrap_err();

    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
