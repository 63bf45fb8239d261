//! Two-stage cleaning pipeline for mission-statement text.
//!
//! Stage one is the "cleantext" protocol: a fixed, ordered list of rewrite
//! rules that lowercases the text, spaces out punctuation, and reduces the
//! string to a small retained alphabet (see [`Ruleset`]). Stage two applies a
//! caller-authored correction table in strict index order (see
//! [`apply_glossary`]).
//!
//! Both stages are pure and total: every input string produces an output
//! string, and unusual characters are folded to spaces rather than rejected.
//!
//! # Example
//!
//! ```
//! use mission_model::Glossary;
//! use mission_normalize::{clean, standard_ruleset};
//!
//! let glossary = Glossary::from_rows(vec![("under - represented", "underrepresented")])?;
//! let out = clean(
//!     "Under-Represented  Communities, Inc.",
//!     standard_ruleset(),
//!     &glossary,
//! );
//! assert_eq!(out, " underrepresented communities ; inc . ");
//! # Ok::<(), mission_model::GlossaryError>(())
//! ```

mod corrector;
mod rules;

pub use corrector::{apply_glossary, apply_glossary_observed};
pub use rules::{RewriteRule, Ruleset, standard_ruleset};

use mission_model::Glossary;

/// Runs the full pipeline: normalize, then apply glossary corrections.
pub fn clean(text: &str, ruleset: &Ruleset, glossary: &Glossary) -> String {
    apply_glossary(&ruleset.normalize(text), glossary)
}
