//! Simplified phonetic encoder and the code-bucket index built on it.
//!
//! The code is a consonant skeleton, not a pronunciation model: vowels are
//! collapsed (apart from a leading-vowel marker), doubled letters are
//! dropped, and consonant classes map onto a small alphabet. Two different
//! words colliding on a code is an accepted false positive — the goal is
//! "probably sounds similar", and difficulty scoring and distractor
//! selection depend on this table's exact collision behavior, so the
//! mapping is fixed rather than refined.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
}

/// Encode `word` into its phonetic code. Case-insensitive, total over any
/// string; the empty string encodes to the empty code.
pub fn encode(word: &str) -> String {
    let chars: Vec<char> = word.to_uppercase().chars().collect();
    let mut code = String::new();

    let Some(&first) = chars.first() else {
        return code;
    };
    if is_vowel(first) {
        code.push('A');
    }

    for (i, &ch) in chars.iter().enumerate() {
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();

        // Collapse doubled letters, except C: CC digraphs need their own
        // lookahead on each occurrence.
        if prev == Some(ch) && ch != 'C' {
            continue;
        }

        match ch {
            'B' => code.push('P'),
            'C' => code.push(if matches!(next, Some('H') | Some('S')) { 'X' } else { 'K' }),
            'D' => code.push(if next == Some('G') { 'J' } else { 'T' }),
            'F' | 'J' | 'L' | 'M' | 'N' | 'R' => code.push(ch),
            'G' => code.push('K'),
            'H' => {
                if prev.is_some_and(is_vowel) && next.is_some_and(is_vowel) {
                    code.push('H');
                }
            }
            'K' => {
                if prev != Some('C') {
                    code.push('K');
                }
            }
            'P' => code.push(if next == Some('H') { 'F' } else { 'P' }),
            'Q' => code.push('K'),
            'S' => code.push(if next == Some('H') { 'X' } else { 'S' }),
            'T' => code.push(if next == Some('H') { '0' } else { 'T' }),
            'V' => code.push('F'),
            'W' => {
                if next.is_some_and(is_vowel) {
                    code.push('W');
                }
            }
            'X' => code.push_str("KS"),
            'Y' => {
                if next.is_some_and(is_vowel) {
                    code.push('Y');
                }
            }
            'Z' => code.push('S'),
            // Vowels mid-word, digits and punctuation contribute nothing.
            _ => {}
        }
    }

    code
}

/// Maps each phonetic code to the words producing it, in insertion order.
/// Words sharing a bucket are each other's phonetic siblings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhoneticIndex {
    buckets: HashMap<String, Vec<String>>,
}

impl PhoneticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `word` under its code. Words with an empty code (no encodable
    /// consonants) are not indexed at all.
    pub fn insert(&mut self, word: &str) {
        let code = encode(word);
        if !code.is_empty() {
            self.buckets.entry(code).or_default().push(word.to_string());
        }
    }

    /// Words sharing `code`, in insertion order. Empty for unknown codes.
    pub fn words_with_code(&self, code: &str) -> &[String] {
        self.buckets.get(code).map_or(&[], Vec::as_slice)
    }

    /// Number of other words sharing `word`'s code. Zero when the word is
    /// the sole occupant of its bucket or its code is empty.
    pub fn sibling_count(&self, word: &str) -> usize {
        let code = encode(word);
        if code.is_empty() {
            return 0;
        }
        self.buckets
            .get(&code)
            .map_or(0, |bucket| bucket.len().saturating_sub(1))
    }

    /// Number of distinct codes in the index.
    pub fn code_count(&self) -> usize {
        self.buckets.len()
    }
}
