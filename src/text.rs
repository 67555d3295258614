//! Text normalization for query matching.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lower-case, strip punctuation, and collapse whitespace runs to one space.
///
/// Trimming happens on both sides of punctuation removal, so `"- hope"`
/// becomes `"hope"` rather than `" hope"`. This keeps `normalize` idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(lowered.trim(), "");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Substring test over already-normalized fields.
///
/// An empty `normalized_query` is a substring of everything and matches.
/// Entry points that want to reject empty queries must check before calling.
pub fn query_matches(normalized_query: &str, name_key: &str, address_key: &str) -> bool {
    name_key.contains(normalized_query) || address_key.contains(normalized_query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("  Hope, Street! "), "hope street");
        assert_eq!(normalize("HARLEM"), "harlem");
        assert_eq!(normalize("Bengaluru,\tKarnataka   560001"), "bengaluru karnataka 560001");
    }

    #[test]
    fn test_normalize_keeps_underscore_and_digits() {
        assert_eq!(normalize("unit_42"), "unit_42");
    }

    #[test]
    fn test_normalize_leading_punctuation() {
        assert_eq!(normalize("- hope"), "hope");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_unicode_letters_survive() {
        assert_eq!(normalize("Tromsø Matsentral"), "tromsø matsentral");
    }

    #[test]
    fn test_query_matches_name_or_address() {
        let name = normalize("Unity Food Relief");
        let addr = normalize("101 Unity Rd, Harlem, NY 10027");
        assert!(query_matches("harlem", &name, &addr));
        assert!(query_matches("unity food", &name, &addr));
        assert!(query_matches("harlem ny", &name, &addr));
        assert!(!query_matches("brooklyn", &name, &addr));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(query_matches("", "anything", "at all"));
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(s in "\\PC{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_empty_normalized_query_matches(q in "[ \\t!?.,;:-]{0,10}", name in "\\PC{0,20}", addr in "\\PC{0,20}") {
            let nq = normalize(&q);
            prop_assert!(nq.is_empty());
            prop_assert!(query_matches(&nq, &normalize(&name), &normalize(&addr)));
        }
    }
}
