//! Error types for the correction table.

use thiserror::Error;

/// Configuration errors detected while building a [`crate::Glossary`].
///
/// These are fatal: a malformed table is rejected before any record is
/// processed, never during a corrective pass.
#[derive(Debug, Error)]
pub enum GlossaryError {
    /// A table row has an empty `word` value after trimming.
    #[error("glossary row {row} has an empty word")]
    EmptyWord { row: usize },

    /// A table row has an empty `fix` value after trimming.
    #[error("glossary row {row} has an empty fix")]
    EmptyFix { row: usize },
}

/// Result type for glossary construction.
pub type Result<T> = std::result::Result<T, GlossaryError>;
