//! Property tests for the cleantext normalizer.

use mission_normalize::standard_ruleset;
use proptest::prelude::*;

const RETAINED_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789;\"'_-:!?.()@$*&#%+ ";

fn normalize(text: &str) -> String {
    standard_ruleset().normalize(text)
}

proptest! {
    // Re-normalizing already-normalized text is a no-op.
    #[test]
    fn idempotent(input in ".*") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    // Every output character is in the retained alphabet.
    #[test]
    fn alphabet_closure(input in ".*") {
        let output = normalize(&input);
        for ch in output.chars() {
            prop_assert!(
                RETAINED_ALPHABET.contains(ch),
                "character {:?} escaped the retained alphabet in {:?}",
                ch,
                output
            );
        }
    }

    // No space runs; exactly one leading and one trailing space.
    #[test]
    fn single_spacing(input in ".*") {
        let output = normalize(&input);
        prop_assert!(!output.contains("  "), "double space in {:?}", output);
        prop_assert!(output.starts_with(' '));
        prop_assert!(output.ends_with(' '));
    }

    // A digit run survives verbatim, surrounded by single spaces.
    #[test]
    fn digit_isolation(
        prefix in "[a-z ]{0,8}",
        digits in "[0-9]{1,10}",
        suffix in "[a-z ]{0,8}",
    ) {
        let output = normalize(&format!("{prefix}{digits}{suffix}"));
        prop_assert!(
            output.contains(&format!(" {digits} ")),
            "digit run {:?} not isolated in {:?}",
            digits,
            output
        );
    }
}

#[test]
fn empty_and_symbol_only_inputs_reduce_to_a_single_space() {
    assert_eq!(normalize(""), " ");
    assert_eq!(normalize("\u{2603}\u{2603}\u{2603}"), " ");
}
