//! Core types for the distractor engine.

use serde::{Deserialize, Serialize};

/// One vocabulary record as handed over by the caller's import step.
///
/// `word` is the canonical answer string; it is displayed with its original
/// casing but compared case-insensitively everywhere in the engine.
/// `sentence` is the clue shown to the user and is opaque here.
/// `repeat_count` is how often the word appeared in historical source
/// material; it only matters when the frequency bonus weight is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub sentence: String,
    pub word: String,
    #[serde(default)]
    pub repeat_count: u32,
}

impl VocabularyEntry {
    /// Create an entry with no historical repeat count.
    pub fn new(sentence: &str, word: &str) -> Self {
        Self {
            sentence: sentence.to_string(),
            word: word.to_string(),
            repeat_count: 0,
        }
    }
}
