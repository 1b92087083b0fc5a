//! Per-word difficulty scoring.
//!
//! A word is "hard" when it has many phonetically similar neighbors and/or
//! is long: `score = sibling_weight * siblings + len / length_divisor`,
//! optionally plus `repeat_count_weight * repeat_count`. Scores are
//! computed once per vocabulary build and cached in the index.

use crate::phonetic::PhoneticIndex;
use crate::types::VocabularyEntry;
use serde::{Deserialize, Serialize};

/// Weights for the difficulty formula.
///
/// The repeat-count frequency bonus is off by default; enable it with
/// [`DifficultyWeights::with_repeat_bonus`] to also reward words that
/// appeared often in historical source material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyWeights {
    pub sibling_weight: f64,
    pub length_divisor: f64,
    pub repeat_count_weight: f64,
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self {
            sibling_weight: 2.0,
            length_divisor: 5.0,
            repeat_count_weight: 0.0,
        }
    }
}

impl DifficultyWeights {
    /// Default weights plus the 0.5 frequency bonus per repeat.
    pub fn with_repeat_bonus() -> Self {
        Self {
            repeat_count_weight: 0.5,
            ..Self::default()
        }
    }
}

/// Score one entry against a fully populated phonetic index.
pub(crate) fn score(
    entry: &VocabularyEntry,
    phonetic: &PhoneticIndex,
    weights: &DifficultyWeights,
) -> f64 {
    let siblings = phonetic.sibling_count(&entry.word) as f64;
    weights.sibling_weight * siblings
        + entry.word.chars().count() as f64 / weights.length_divisor
        + weights.repeat_count_weight * f64::from(entry.repeat_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> VocabularyEntry {
        VocabularyEntry::new("clue", word)
    }

    fn index_of(words: &[&str]) -> PhoneticIndex {
        let mut index = PhoneticIndex::new();
        for word in words {
            index.insert(word);
        }
        index
    }

    #[test]
    fn siblings_dominate_length() {
        let phonetic = index_of(&["CAT", "KAT", "BAT", "DOG"]);
        let weights = DifficultyWeights::default();

        let cat = score(&entry("CAT"), &phonetic, &weights);
        let dog = score(&entry("DOG"), &phonetic, &weights);

        // CAT has a KT-sibling (KAT); DOG sits alone on its code.
        assert!((cat - 2.6).abs() < 1e-9);
        assert!((dog - 0.6).abs() < 1e-9);
        assert!(cat >= dog);
    }

    #[test]
    fn lonely_words_score_by_length_only() {
        let phonetic = index_of(&["ABANDON"]);
        let weights = DifficultyWeights::default();
        let got = score(&entry("ABANDON"), &phonetic, &weights);
        assert!((got - 7.0 / 5.0).abs() < 1e-9);
    }

    #[test]
    fn repeat_bonus_only_when_enabled() {
        let phonetic = index_of(&["DOG"]);
        let mut seen_often = entry("DOG");
        seen_often.repeat_count = 4;

        let base = score(&seen_often, &phonetic, &DifficultyWeights::default());
        let boosted = score(&seen_often, &phonetic, &DifficultyWeights::with_repeat_bonus());

        assert!((base - 0.6).abs() < 1e-9);
        assert!((boosted - 2.6).abs() < 1e-9);
    }

    #[test]
    fn unindexed_code_counts_zero_siblings() {
        // "HI" encodes to the empty code and is never indexed; its score
        // must still be non-negative.
        let phonetic = index_of(&["HI", "CAT"]);
        let got = score(&entry("HI"), &phonetic, &DifficultyWeights::default());
        assert!((got - 0.4).abs() < 1e-9);
    }
}
