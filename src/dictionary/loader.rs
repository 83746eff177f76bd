//! Word-list loading
//!
//! Filters raw vocabulary down to usable words before insertion: only
//! all-lowercase ASCII tokens of three or more letters go in. Everything
//! else is silently skipped.

use super::Trie;
use std::fs;
use std::io;
use std::path::Path;

/// True for tokens the dictionary accepts
///
/// A usable word is at least three letters long and entirely lowercase
/// ASCII. Shorter tokens can never be chained, and anything with
/// punctuation, digits or uppercase letters can't appear on a board.
#[must_use]
pub fn is_dictionary_word(token: &str) -> bool {
    token.len() >= 3 && token.chars().all(|c| c.is_ascii_lowercase())
}

/// Build a trie from raw tokens, skipping unusable ones
///
/// # Examples
/// ```
/// use letterboxed::dictionary::loader::trie_from_words;
///
/// let trie = trie_from_words(["cat", "at", "Dog", "sea-lion", "horse"]);
/// assert_eq!(trie.len(), 2); // only "cat" and "horse" survive
/// ```
pub fn trie_from_words<I, S>(words: I) -> Trie
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trie = Trie::new();
    for word in words {
        let word = word.as_ref();
        if is_dictionary_word(word) {
            trie.insert(word);
        }
    }
    trie
}

/// Load a word list from a file, one token per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Trie> {
    let content = fs::read_to_string(path)?;
    Ok(trie_from_words(content.lines().map(str::trim)))
}
