//! Prefix-tree dictionary
//!
//! Membership and prefix queries cost time proportional to the query
//! length, independent of dictionary size. That matters here because the
//! solver issues a prefix query for every candidate letter extension at
//! every search level.

use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default)]
struct Node {
    children: FxHashMap<char, Node>,
    end_of_word: bool,
}

/// Prefix tree over the solving vocabulary
///
/// Built once before a solve and never mutated afterward. Lookups never
/// fail; absent keys are negative results.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: Node,
    words: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Re-inserting an existing word is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.end_of_word {
            node.end_of_word = true;
            self.words += 1;
        }
    }

    /// True iff `word` was inserted verbatim
    ///
    /// # Examples
    /// ```
    /// use letterboxed::dictionary::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("testing");
    /// assert!(trie.contains("testing"));
    /// assert!(!trie.contains("test")); // prefix, but never inserted
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(word).is_some_and(|node| node.end_of_word)
    }

    /// True iff some inserted word begins with `prefix`, including
    /// `prefix` itself
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }

    /// Every inserted word beginning with `prefix`
    ///
    /// Includes `prefix` itself only when it was separately inserted as a
    /// complete word; never includes partial entries.
    #[must_use]
    pub fn words_under(&self, prefix: &str) -> FxHashSet<String> {
        let mut found = FxHashSet::default();
        if let Some(node) = self.node_at(prefix) {
            collect_words(node, prefix.to_string(), &mut found);
        }
        found
    }

    /// Number of distinct inserted words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    fn node_at(&self, key: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

fn collect_words(node: &Node, formed: String, found: &mut FxHashSet<String>) {
    if node.end_of_word {
        found.insert(formed.clone());
    }
    for (&ch, child) in &node.children {
        let mut longer = formed.clone();
        longer.push(ch);
        collect_words(child, longer, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        let mut trie = Trie::new();
        for word in ["testing", "testers", "testament", "tea", "cat"] {
            trie.insert(word);
        }
        trie
    }

    #[test]
    fn contains_after_insert() {
        let trie = sample();
        assert!(trie.contains("testing"));
        assert!(trie.contains("tea"));
        assert!(trie.contains("cat"));
    }

    #[test]
    fn contains_survives_further_inserts() {
        let mut trie = Trie::new();
        trie.insert("testing");
        assert!(trie.contains("testing"));
        trie.insert("testers");
        trie.insert("test");
        assert!(trie.contains("testing"));
    }

    #[test]
    fn proper_prefix_is_not_a_word() {
        let mut trie = Trie::new();
        trie.insert("testing");
        assert!(!trie.contains("test"));
        assert!(trie.has_prefix("test"));
    }

    #[test]
    fn every_prefix_of_an_inserted_word_is_a_prefix() {
        let trie = sample();
        for end in 1..="testing".len() {
            assert!(trie.has_prefix(&"testing"[..end]));
        }
    }

    #[test]
    fn absent_keys_are_negative_not_errors() {
        let trie = sample();
        assert!(!trie.contains("dog"));
        assert!(!trie.has_prefix("dog"));
        assert!(trie.words_under("dog").is_empty());
    }

    #[test]
    fn words_under_returns_the_exact_subtree() {
        let trie = sample();
        let words = trie.words_under("test");
        assert_eq!(words.len(), 3);
        assert!(words.contains("testing"));
        assert!(words.contains("testers"));
        assert!(words.contains("testament"));
        // "test" was never inserted as a word itself
        assert!(!words.contains("test"));
    }

    #[test]
    fn words_under_includes_the_prefix_when_inserted() {
        let mut trie = sample();
        trie.insert("test");
        let words = trie.words_under("test");
        assert_eq!(words.len(), 4);
        assert!(words.contains("test"));
    }

    #[test]
    fn words_under_empty_prefix_lists_everything() {
        let trie = sample();
        assert_eq!(trie.words_under("").len(), trie.len());
    }

    #[test]
    fn reinserting_is_a_no_op() {
        let mut trie = Trie::new();
        trie.insert("cat");
        trie.insert("cat");
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("cat"));
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(!trie.contains("cat"));
        assert!(!trie.has_prefix("c"));
        assert!(trie.words_under("c").is_empty());
    }
}
