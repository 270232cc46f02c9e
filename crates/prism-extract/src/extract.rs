//! Item phrase extraction: sanitize, tokenize, filter, assemble.

use prism_core::NOT_FOUND;
use regex::Regex;

use crate::lexicon::is_noise;
use crate::zone::golden_zone;

/// Extracts the core item phrase from a marketing title.
///
/// Holds the compiled patterns; construct once and reuse across a batch.
pub struct ItemExtractor {
    /// Spec tokens such as `20l`, `500ml`, `4mm` — deleted before tokenizing
    /// so unit-bearing numbers never pollute the token stream.
    spec_re: Regex,
    /// Alphabetic tokens; hyphens survive inside a token.
    token_re: Regex,
}

impl ItemExtractor {
    /// Compiles the extraction patterns.
    ///
    /// # Panics
    ///
    /// Only on an invalid hardcoded pattern, which is a programming error.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spec_re: Regex::new(r"\b(\d+l|\d+ml|\d+mm|\d+g|\d+kg)\b").expect("valid spec regex"),
            token_re: Regex::new(r"\b[a-zA-Z-]+\b").expect("valid token regex"),
        }
    }

    /// Identifies the core item phrase for display.
    ///
    /// Returns a Title-Cased phrase, or [`NOT_FOUND`] when no usable tokens
    /// survive filtering. Deterministic: the same title always yields an
    /// identical string.
    #[must_use]
    pub fn identify(&self, title: &str) -> String {
        let zone = golden_zone(title);

        // Possessives are stripped before tokenizing so "Men's" and "MEN'S"
        // normalize to the same lexicon key.
        let sanitized = zone.to_lowercase().replace("'s", "");
        let cleaned = self.spec_re.replace_all(&sanitized, "");

        let words: Vec<&str> = self
            .token_re
            .find_iter(&cleaned)
            .map(|m| m.as_str())
            .collect();
        if words.is_empty() {
            return NOT_FOUND.to_string();
        }

        // The first token is assumed to be the brand or seller name — unless
        // it is the only token, which must survive.
        let candidates = if words.len() > 1 {
            &words[1..]
        } else {
            &words[..]
        };

        let item_words: Vec<&str> = candidates
            .iter()
            .copied()
            .filter(|w| !is_noise(w))
            .collect();
        if item_words.is_empty() {
            return NOT_FOUND.to_string();
        }

        title_case(&item_words.join(" "))
    }
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-Cases a phrase of lowercase tokens: the letter following any
/// non-letter is capitalized, so `"anti-slip mat"` becomes `"Anti-Slip Mat"`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_ascii_alphabetic() {
            if prev_is_letter {
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c.to_ascii_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ItemExtractor {
        ItemExtractor::new()
    }

    // -----------------------------------------------------------------------
    // identify — happy paths
    // -----------------------------------------------------------------------

    #[test]
    fn identifies_item_after_brand_and_noise_removal() {
        let item = extractor().identify("Nike Men's Running Shoes");
        assert_eq!(item, "Running Shoes");
    }

    #[test]
    fn identify_is_idempotent() {
        let ex = extractor();
        let title = "Boldfit Yoga Mat for Men Women Home Workout 6mm Thickness";
        assert_eq!(ex.identify(title), ex.identify(title));
    }

    #[test]
    fn mixed_case_possessives_normalize_identically() {
        let ex = extractor();
        assert_eq!(
            ex.identify("Nike Men's Running Shoes"),
            ex.identify("NIKE MEN'S RUNNING SHOES")
        );
    }

    #[test]
    fn hyphenated_token_survives_and_title_cases() {
        let item = extractor().identify("Acme Anti-Slip Yoga Mat");
        assert_eq!(item, "Anti-Slip Yoga Mat");
    }

    #[test]
    fn spec_tokens_are_stripped() {
        let item = extractor().identify("Acme Water Bottle 500ML Steel");
        assert_eq!(item, "Water Bottle Steel");
        assert!(!item.to_lowercase().contains("500"));
    }

    #[test]
    fn full_title_pipeline_extracts_item_phrase() {
        // Character 50 lands mid-"Thickness" with no later space, so the
        // zone hard-cuts at 50 and the trailing token survives as "th".
        let item = extractor().identify("Boldfit Yoga Mat for Men Women Home Workout 6mm Thickness");
        assert_eq!(item, "Yoga Mat Th");
        assert!(item.contains("Yoga Mat"));
        for excluded in ["Boldfit", "Men", "Women", "Home", "Workout", "6mm"] {
            assert!(!item.contains(excluded), "expected {excluded:?} to be filtered out");
        }
    }

    // -----------------------------------------------------------------------
    // identify — sentinel paths
    // -----------------------------------------------------------------------

    #[test]
    fn empty_title_returns_not_found() {
        assert_eq!(extractor().identify(""), NOT_FOUND);
    }

    #[test]
    fn whitespace_only_title_returns_not_found() {
        assert_eq!(extractor().identify("   "), NOT_FOUND);
    }

    #[test]
    fn numeric_only_title_returns_not_found() {
        assert_eq!(extractor().identify("12345 678 90"), NOT_FOUND);
    }

    #[test]
    fn noise_only_remainder_returns_not_found() {
        // Everything after the brand is lexicon noise.
        assert_eq!(extractor().identify("Brand Men's Black"), NOT_FOUND);
    }

    #[test]
    fn single_token_title_is_not_brand_stripped() {
        assert_eq!(extractor().identify("Nike"), "Nike");
    }

    #[test]
    fn single_noise_token_still_returns_not_found() {
        // The single-token guard skips brand stripping, but the noise
        // filter still applies.
        assert_eq!(extractor().identify("Premium"), NOT_FOUND);
    }

    // -----------------------------------------------------------------------
    // title_case
    // -----------------------------------------------------------------------

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("water bottle steel"), "Water Bottle Steel");
    }

    #[test]
    fn title_case_capitalizes_after_hyphen() {
        assert_eq!(title_case("anti-slip"), "Anti-Slip");
    }

    #[test]
    fn title_case_of_empty_string_is_empty() {
        assert_eq!(title_case(""), "");
    }
}
