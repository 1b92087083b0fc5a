//! Prefix index over the vocabulary, backed by a character trie.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Node {
    children: BTreeMap<char, Node>,
    /// Original-cased word stored at a terminal node.
    word: Option<String>,
}

/// Trie keyed by lowercased characters; terminals keep the original casing.
///
/// Inserting the same word twice (in any casing) is idempotent: the second
/// insert overwrites the stored casing but never duplicates a terminal, so
/// the index has set semantics per word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefixIndex {
    root: Node,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word`, traversing by lowercased characters. Any string is
    /// accepted; the empty string marks a degenerate terminal at the root.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars().flat_map(char::to_lowercase) {
            node = node.children.entry(ch).or_default();
        }
        node.word = Some(word.to_string());
    }

    /// All complete words stored under `prefix` (case-insensitive).
    ///
    /// Returns an empty vec when no inserted word starts with the prefix.
    /// Order is a depth-first walk in character order — deterministic per
    /// build, but callers shuffle downstream and must not rely on it.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut node = &self.root;
        for ch in prefix.chars().flat_map(char::to_lowercase) {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut words = Vec::new();
        collect_words(node, &mut words);
        words
    }
}

fn collect_words(node: &Node, out: &mut Vec<String>) {
    if let Some(word) = &node.word {
        out.push(word.clone());
    }
    for child in node.children.values() {
        collect_words(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_prefix_of_an_inserted_word_finds_it() {
        let mut index = PrefixIndex::new();
        for word in ["ABANDON", "ABASH", "ABATE", "BANDIT"] {
            index.insert(word);
        }

        for word in ["ABANDON", "ABASH", "ABATE", "BANDIT"] {
            for k in 1..=word.len() {
                let prefix = &word[..k];
                assert!(
                    index.words_with_prefix(prefix).contains(&word.to_string()),
                    "{word} missing under prefix {prefix}"
                );
            }
        }
    }

    #[test]
    fn missing_prefix_is_empty() {
        let mut index = PrefixIndex::new();
        index.insert("abandon");
        assert!(index.words_with_prefix("z").is_empty());
        assert!(index.words_with_prefix("abq").is_empty());
        assert!(index.words_with_prefix("abandonment").is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive_and_preserves_casing() {
        let mut index = PrefixIndex::new();
        index.insert("Abandon");
        assert_eq!(index.words_with_prefix("AB"), vec!["Abandon".to_string()]);
        assert_eq!(index.words_with_prefix("ab"), vec!["Abandon".to_string()]);
    }

    #[test]
    fn reinsert_overwrites_instead_of_duplicating() {
        let mut index = PrefixIndex::new();
        index.insert("abate");
        index.insert("ABATE");
        assert_eq!(index.words_with_prefix("a"), vec!["ABATE".to_string()]);
    }

    #[test]
    fn empty_prefix_returns_everything() {
        let mut index = PrefixIndex::new();
        index.insert("cat");
        index.insert("dog");
        let mut all = index.words_with_prefix("");
        all.sort();
        assert_eq!(all, vec!["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn empty_word_is_tolerated() {
        let mut index = PrefixIndex::new();
        index.insert("");
        assert_eq!(index.words_with_prefix(""), vec![String::new()]);
        assert!(index.words_with_prefix("a").is_empty());
    }
}
