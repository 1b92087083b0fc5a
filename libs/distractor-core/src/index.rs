//! Vocabulary index construction.
//!
//! One-shot build: a first pass populates the prefix and phonetic indexes,
//! a second pass scores difficulty against the now-complete phonetic index.
//! There is no incremental update — any vocabulary change means a rebuild.

use crate::difficulty::{self, DifficultyWeights};
use crate::error::{EngineError, Result};
use crate::phonetic::PhoneticIndex;
use crate::trie::PrefixIndex;
use crate::types::VocabularyEntry;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Fewest case-insensitively distinct words a vocabulary may have: the
/// target plus three distractors.
pub const MIN_DISTINCT_WORDS: usize = 4;

/// All index structures for one vocabulary, built together and read-only
/// afterwards. Shared freely across threads during option generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyIndex {
    entries: Vec<VocabularyEntry>,
    prefix: PrefixIndex,
    phonetic: PhoneticIndex,
    difficulty: HashMap<String, f64>,
}

impl VocabularyIndex {
    /// The entries the index was built from, in input order.
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn prefix(&self) -> &PrefixIndex {
        &self.prefix
    }

    pub fn phonetic(&self) -> &PhoneticIndex {
        &self.phonetic
    }

    /// Cached difficulty score for `word` (exact source casing).
    /// Words unknown to the index score 0.
    pub fn difficulty_of(&self, word: &str) -> f64 {
        self.difficulty.get(word).copied().unwrap_or(0.0)
    }
}

/// Builds a [`VocabularyIndex`] from caller-supplied entries.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndexBuilder {
    weights: DifficultyWeights,
}

impl VocabularyIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: DifficultyWeights) -> Self {
        Self { weights }
    }

    /// Validate and index `entries`.
    ///
    /// Rejects blank words and vocabularies with fewer than
    /// [`MIN_DISTINCT_WORDS`] case-insensitively distinct words — option
    /// generation could never produce a full 4-option set from less.
    pub fn build(&self, entries: Vec<VocabularyEntry>) -> Result<VocabularyIndex> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.word.trim().is_empty() {
                return Err(EngineError::EmptyWord { index });
            }
        }

        let distinct: HashSet<String> =
            entries.iter().map(|e| e.word.to_lowercase()).collect();
        if distinct.len() < MIN_DISTINCT_WORDS {
            return Err(EngineError::InsufficientVocabulary {
                distinct: distinct.len(),
            });
        }

        let mut prefix = PrefixIndex::new();
        let mut phonetic = PhoneticIndex::new();
        for entry in &entries {
            prefix.insert(&entry.word);
            phonetic.insert(&entry.word);
        }

        // Sibling counts need the fully populated phonetic index.
        let difficulty: HashMap<String, f64> = entries
            .iter()
            .map(|entry| {
                (
                    entry.word.clone(),
                    difficulty::score(entry, &phonetic, &self.weights),
                )
            })
            .collect();

        tracing::debug!(
            words = entries.len(),
            codes = phonetic.code_count(),
            "built vocabulary index"
        );

        Ok(VocabularyIndex {
            entries,
            prefix,
            phonetic,
            difficulty,
        })
    }
}

/// Build an index with default difficulty weights.
pub fn build_vocabulary_index(entries: Vec<VocabularyEntry>) -> Result<VocabularyIndex> {
    VocabularyIndexBuilder::new().build(entries)
}
