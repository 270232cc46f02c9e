//! Static noise lexicon for candidate token filtering.

/// Hand-curated noise words that never survive into an item phrase.
///
/// Comparison happens post-lowercasing, so the entries are lowercase single
/// tokens. Hyphenated tokens are matched whole — `"anti-slip"` is one token
/// and is not in this list even though `"anti"` and `"slip"` are.
pub(crate) const NOISE_WORDS: &[&str] = &[
    // Adjectives & descriptors
    "stylish",
    "comfortable",
    "premium",
    "high",
    "quality",
    "heavy",
    "duty",
    "waterproof",
    "convertible",
    "streachable",
    "full",
    "loose",
    "relaxed",
    "retractable",
    "handheld",
    "rechargeable",
    "portable",
    "soft",
    "stretchy",
    "cushioned",
    "breathable",
    "sturdy",
    "micronized",
    "new",
    "complete",
    // Genders (possessives already stripped upstream)
    "men",
    "women",
    "kids",
    "man",
    "woman",
    "boys",
    "girls",
    "unisex",
    "adult",
    // Common filler
    "home",
    "gym",
    "workout",
    "exercise",
    "training",
    "gear",
    "for",
    "accessories",
    "powerlifting",
    "solid",
    "combo",
    "kit",
    "pack",
    "set",
    "pcs",
    "of",
    "gram",
    "serves",
    "piece",
    "pieces",
    "anti",
    "slip",
    "multi",
    "with",
    "and",
    "the",
    "a",
    "in",
    "per",
    "ideal",
    "everyday",
    "use",
    // Colors & sizes
    "black",
    "white",
    "red",
    "blue",
    "green",
    "multicolor",
    "large",
    "medium",
    "small",
    "size",
    "fit",
    // Vague nouns that are usually noise
    "fitness",
    "toning",
    "band",
    "bands",
    "cover",
    "support",
];

/// Returns `true` when `word` (pre-lowercased) is in the noise lexicon.
#[must_use]
pub(crate) fn is_noise(word: &str) -> bool {
    NOISE_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_noise_word_matches() {
        assert!(is_noise("premium"));
        assert!(is_noise("men"));
        assert!(is_noise("multicolor"));
    }

    #[test]
    fn item_words_do_not_match() {
        assert!(!is_noise("yoga"));
        assert!(!is_noise("mat"));
        assert!(!is_noise("bottle"));
    }

    #[test]
    fn hyphenated_compound_is_not_noise() {
        assert!(is_noise("anti"));
        assert!(is_noise("slip"));
        assert!(!is_noise("anti-slip"));
    }

    #[test]
    fn matching_is_exact_not_substring() {
        assert!(!is_noise("bandana"));
        assert!(!is_noise("fitnesse"));
    }
}
