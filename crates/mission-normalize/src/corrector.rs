//! Ordered glossary substitution over normalized text.
//!
//! Entries apply strictly index-ascending, one full pass per entry, carrying
//! the result forward. An earlier entry's replacement may create or destroy
//! matches for later entries; that cascade is authored behavior and is
//! preserved exactly. Matching is literal substring replacement, so the input
//! is expected to already be in cleantext form (entries such as
//! `" under - represented "` only match spaced-out hyphens).

use mission_model::{Glossary, GlossaryEntry};

/// Applies every glossary entry to `text` in table order.
///
/// Each applied entry is logged at debug level with its index and pair for
/// audit. A text matching no entries is returned unchanged.
pub fn apply_glossary(text: &str, glossary: &Glossary) -> String {
    apply_glossary_observed(text, glossary, |index, entry| {
        tracing::debug!(
            index,
            word = entry.word(),
            fix = entry.fix(),
            "glossary entry"
        );
    })
}

/// Like [`apply_glossary`], with an injected observer called once per entry
/// (before its substitution) instead of the default debug logging.
pub fn apply_glossary_observed<F>(text: &str, glossary: &Glossary, mut observer: F) -> String
where
    F: FnMut(usize, &GlossaryEntry),
{
    glossary
        .entries()
        .iter()
        .enumerate()
        .fold(text.to_string(), |result, (index, entry)| {
            observer(index, entry);
            result.replace(entry.word(), entry.fix())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glossary(rows: Vec<(&str, &str)>) -> Glossary {
        Glossary::from_rows(rows).unwrap()
    }

    #[test]
    fn test_empty_table_is_identity() {
        let table = Glossary::default();
        assert_eq!(apply_glossary(" anything at all ", &table), " anything at all ");
    }

    #[test]
    fn test_no_match_is_identity() {
        let table = glossary(vec![("teh", "the")]);
        assert_eq!(apply_glossary(" nothing here ", &table), " nothing here ");
    }

    #[test]
    fn test_basic_correction() {
        let table = glossary(vec![("teh", "the")]);
        assert_eq!(
            apply_glossary(" teh mission ", &table),
            " the mission "
        );
    }

    #[test]
    fn test_padding_restricts_to_whole_tokens() {
        let table = glossary(vec![("teh", "the")]);
        // "teh" inside a longer token is untouched.
        assert_eq!(apply_glossary(" tehran ", &table), " tehran ");
    }

    #[test]
    fn test_entries_cascade_in_table_order() {
        let table = glossary(vec![("a", "b"), ("b", "c")]);
        assert_eq!(apply_glossary(" a ", &table), " c ");

        let reversed = glossary(vec![("b", "c"), ("a", "b")]);
        assert_eq!(apply_glossary(" a ", &reversed), " b ");
    }

    #[test]
    fn test_multi_token_entry() {
        let table = glossary(vec![("under - represented", "underrepresented")]);
        assert_eq!(
            apply_glossary(" under - represented communities ; inc . ", &table),
            " underrepresented communities ; inc . "
        );
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let table = glossary(vec![("teh", "the")]);
        assert_eq!(
            apply_glossary(" teh cause and teh effect ", &table),
            " the cause and the effect "
        );
    }

    #[test]
    fn test_observer_sees_every_entry_in_order() {
        let table = glossary(vec![("a", "b"), ("x", "y"), ("b", "c")]);
        let mut seen = Vec::new();
        apply_glossary_observed(" a ", &table, |index, entry| {
            seen.push((index, entry.word().to_string()));
        });
        assert_eq!(
            seen,
            vec![
                (0, " a ".to_string()),
                (1, " x ".to_string()),
                (2, " b ".to_string()),
            ]
        );
    }
}
