//! Multiple-choice option generation.
//!
//! A strict priority cascade collects three distractors for a target word:
//! phonetic siblings (hard words only), then edit-distance near misses,
//! then words sharing the first letter, then random draws. The correct
//! answer is appended and the whole set shuffled, so its position is never
//! predictable.

use crate::distance::levenshtein_distance;
use crate::index::VocabularyIndex;
use crate::phonetic;
use crate::types::VocabularyEntry;
use rand::seq::SliceRandom;
use rand::Rng;

/// Difficulty score above which the phonetic stage is attempted at all.
/// At or below it, a word's sound-alikes are not considered confusing
/// enough to prefer over spelling-based candidates.
pub const PHONETIC_DIFFICULTY_THRESHOLD: f64 = 5.0;

const DISTRACTOR_COUNT: usize = 3;

/// Generate the option set for `target`: 3 distractors plus the correct
/// word, shuffled.
///
/// Distractors are unique and never equal to the target, compared
/// case-insensitively. The returned vec has exactly 4 entries for any
/// index built by this crate, since building enforces at least 4 distinct
/// words; the cascade itself carries no guard and would yield fewer
/// options from a thinner vocabulary.
pub fn generate_options<R: Rng + ?Sized>(
    target: &VocabularyEntry,
    index: &VocabularyIndex,
    rng: &mut R,
) -> Vec<String> {
    let correct_lower = target.word.to_lowercase();
    let mut distractors: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);

    // Stage 1: phonetic siblings, for hard words only.
    if index.difficulty_of(&target.word) > PHONETIC_DIFFICULTY_THRESHOLD {
        let code = phonetic::encode(&target.word);
        for candidate in index.phonetic().words_with_code(&code) {
            if distractors.len() >= DISTRACTOR_COUNT {
                break;
            }
            try_add(&mut distractors, candidate, &correct_lower);
        }
    }

    // Stage 2: near misses at edit distance 1..=2, closest first. The sort
    // is stable, so ties keep vocabulary encounter order.
    if distractors.len() < DISTRACTOR_COUNT {
        let mut near_misses: Vec<(&str, usize)> = index
            .entries()
            .iter()
            .filter_map(|entry| {
                let d = levenshtein_distance(&correct_lower, &entry.word.to_lowercase());
                (1..=2).contains(&d).then_some((entry.word.as_str(), d))
            })
            .collect();
        near_misses.sort_by_key(|&(_, d)| d);

        for (candidate, _) in near_misses {
            if distractors.len() >= DISTRACTOR_COUNT {
                break;
            }
            try_add(&mut distractors, candidate, &correct_lower);
        }
    }

    // Stage 3: words starting with the same letter, in random order.
    if distractors.len() < DISTRACTOR_COUNT {
        if let Some(first) = correct_lower.chars().next() {
            let mut same_letter = index.prefix().words_with_prefix(&first.to_string());
            same_letter.shuffle(rng);
            for candidate in &same_letter {
                if distractors.len() >= DISTRACTOR_COUNT {
                    break;
                }
                try_add(&mut distractors, candidate, &correct_lower);
            }
        }
    }

    // Stage 4: uniform random fallback, without replacement.
    if distractors.len() < DISTRACTOR_COUNT {
        let mut pool: Vec<&str> = index.entries().iter().map(|e| e.word.as_str()).collect();
        pool.shuffle(rng);
        for candidate in pool {
            if distractors.len() >= DISTRACTOR_COUNT {
                break;
            }
            try_add(&mut distractors, candidate, &correct_lower);
        }
    }

    let mut options = distractors;
    options.push(target.word.clone());
    options.shuffle(rng);
    options
}

/// Add `candidate` unless it is the target or already chosen
/// (case-insensitive on both counts).
fn try_add(distractors: &mut Vec<String>, candidate: &str, correct_lower: &str) {
    let lower = candidate.to_lowercase();
    if lower == correct_lower {
        return;
    }
    if distractors.iter().any(|d| d.to_lowercase() == lower) {
        return;
    }
    distractors.push(candidate.to_string());
}
