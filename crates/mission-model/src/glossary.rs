//! Correction table types.
//!
//! A glossary is an ordered list of literal (word, fix) substitutions. Order
//! is caller-authored and significant: entries apply index-ascending, and an
//! earlier entry's replacement may create or destroy matches for later
//! entries. That cascading is intentional, so the table is kept exactly as
//! authored and never sorted or deduplicated here.

use serde::{Deserialize, Serialize};

use crate::error::{GlossaryError, Result};

/// One correction pair from the glossary table.
///
/// Both sides are padded with a single leading and trailing space at
/// construction, so a match only fires on whole space-delimited tokens of
/// already-normalized text (the normalizer guarantees every token is
/// space-separated, including punctuation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    word: String,
    fix: String,
}

impl GlossaryEntry {
    /// Builds an entry from raw table cells, trimming and space-padding both
    /// sides. `row` is the zero-based table index, used for error context.
    pub fn from_cells(row: usize, word: &str, fix: &str) -> Result<Self> {
        let word = word.trim();
        let fix = fix.trim();
        if word.is_empty() {
            return Err(GlossaryError::EmptyWord { row });
        }
        if fix.is_empty() {
            return Err(GlossaryError::EmptyFix { row });
        }
        Ok(Self {
            word: format!(" {word} "),
            fix: format!(" {fix} "),
        })
    }

    /// The space-padded pattern to search for.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The space-padded replacement.
    pub fn fix(&self) -> &str {
        &self.fix
    }
}

/// The validated, priority-ordered correction table.
///
/// Immutable after construction; a processing run holds a shared reference
/// and the table never changes mid-pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    entries: Vec<GlossaryEntry>,
}

impl Glossary {
    /// Builds a glossary from (word, fix) rows in table order.
    ///
    /// # Errors
    ///
    /// Returns the first [`GlossaryError`] encountered; no partial table is
    /// ever produced.
    pub fn from_rows<I, W, F>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (W, F)>,
        W: AsRef<str>,
        F: AsRef<str>,
    {
        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(row, (word, fix))| GlossaryEntry::from_cells(row, word.as_ref(), fix.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Entries in application order.
    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
