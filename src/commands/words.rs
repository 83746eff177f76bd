//! Dictionary browsing command
//!
//! Lists the dictionary words under a prefix, the same trie subtree the
//! solver prunes against.

use crate::dictionary::Trie;

/// Prefix listing of the dictionary
pub struct WordsReport {
    pub prefix: String,
    /// Matching words in alphabetical order.
    pub words: Vec<String>,
    /// Total words in the dictionary.
    pub dictionary_size: usize,
}

/// Collect every dictionary word beginning with `prefix`, sorted
#[must_use]
pub fn words_under(prefix: &str, dictionary: &Trie) -> WordsReport {
    let mut words: Vec<String> = dictionary.words_under(prefix).into_iter().collect();
    words.sort_unstable();

    WordsReport {
        prefix: prefix.to_string(),
        words,
        dictionary_size: dictionary.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::trie_from_words;

    #[test]
    fn listing_is_sorted_and_exact() {
        let dictionary = trie_from_words(["testing", "tea", "testers", "cat"]);
        let report = words_under("te", &dictionary);

        assert_eq!(report.prefix, "te");
        assert_eq!(report.words, vec!["tea", "testers", "testing"]);
        assert_eq!(report.dictionary_size, 4);
    }

    #[test]
    fn unknown_prefix_lists_nothing() {
        let dictionary = trie_from_words(["testing"]);
        let report = words_under("dog", &dictionary);
        assert!(report.words.is_empty());
    }
}
