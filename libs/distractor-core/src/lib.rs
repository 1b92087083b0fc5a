//! Distractor-generation engine for vocabulary practice tests.
//!
//! Provides:
//! - Prefix index (trie) for shared-prefix lookup
//! - Simplified phonetic encoder and code-bucket index
//! - Levenshtein edit distance
//! - Per-word difficulty scoring (phonetic siblings + length)
//! - Multiple-choice option generation (3 distractors + the answer)
//!
//! The engine is a pure computation library: the caller hands it a flat
//! list of [`VocabularyEntry`] records, builds a [`VocabularyIndex`] once,
//! and then generates option sets from it. The index is read-only after
//! construction, so concurrent `generate_options` calls need no
//! coordination. All randomness flows through an injectable [`rand::Rng`].

pub mod difficulty;
pub mod distance;
pub mod error;
pub mod index;
pub mod phonetic;
pub mod selector;
pub mod trie;
pub mod types;

pub use difficulty::DifficultyWeights;
pub use distance::levenshtein_distance;
pub use error::{EngineError, Result};
pub use index::{build_vocabulary_index, VocabularyIndex, VocabularyIndexBuilder, MIN_DISTINCT_WORDS};
pub use phonetic::{encode, PhoneticIndex};
pub use selector::{generate_options, PHONETIC_DIFFICULTY_THRESHOLD};
pub use trie::PrefixIndex;
pub use types::VocabularyEntry;
