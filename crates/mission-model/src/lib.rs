//! Core data model for mission-statement text preparation.
//!
//! This crate holds the correction-table types shared by the normalization
//! pipeline and the ingestion layer:
//! - [`GlossaryEntry`]: one ordered (word, fix) correction pair
//! - [`Glossary`]: the validated, priority-ordered correction table
//! - [`GlossaryError`]: table-level configuration errors

mod error;
mod glossary;

pub use error::{GlossaryError, Result};
pub use glossary::{Glossary, GlossaryEntry};
