//! Error types for distractor-core.

use thiserror::Error;

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while building a vocabulary index.
///
/// The core algorithms (trie traversal, phonetic encoding, edit distance,
/// option generation) are total functions over any string input; all
/// fallibility sits at the build boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("vocabulary has {distinct} distinct words, need at least 4 to generate options")]
    InsufficientVocabulary { distinct: usize },

    #[error("entry {index} has an empty word")]
    EmptyWord { index: usize },
}
