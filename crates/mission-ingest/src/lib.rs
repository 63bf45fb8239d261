//! CSV ingestion for mission-statement text preparation.
//!
//! Two responsibilities, both incidental glue around the pipeline:
//! - loading the glossary correction table (`word`/`fix` columns, row order
//!   preserved as correction priority)
//! - loading and writing record tables, where the pipeline rewrites exactly
//!   one named column and everything else round-trips untouched

mod error;
mod glossary;
mod records;

pub use error::{IngestError, Result};
pub use glossary::load_glossary;
pub use records::{RecordTable, load_records, write_records};
