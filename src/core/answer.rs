//! Candidate answer chains
//!
//! An `Answer` is an ordered chain of words. While the chain grows, its
//! last word may be an incomplete prefix still being typed; every earlier
//! word is a complete dictionary word. Growth never mutates a chain in
//! place; the two transitions below each produce a new value.

use super::{Coordinate, Word};
use rustc_hash::FxHashSet;

/// An ordered chain of words forming a candidate or final solution
///
/// Equality and hashing are fully structural (same words in the same
/// order), which makes `Answer` directly usable as the search frontier's
/// deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Answer<'p> {
    words: Vec<Word<'p>>,
}

impl<'p> Answer<'p> {
    /// A chain opening with a single, possibly one-letter, word
    #[must_use]
    pub fn opening(word: Word<'p>) -> Self {
        Self { words: vec![word] }
    }

    /// The words of the chain in order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word<'p>] {
        &self.words
    }

    /// Number of words in the chain, counting the one still being typed
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The word currently being typed
    #[must_use]
    pub fn last_word(&self) -> &Word<'p> {
        self.words.last().expect("answers are never empty")
    }

    /// The cell the chain currently ends on
    #[must_use]
    pub fn last_coordinate(&self) -> Coordinate {
        self.last_word().last()
    }

    /// The chain with its current word grown by one cell
    ///
    /// The word keeps building toward a longer dictionary entry.
    #[must_use]
    pub fn extend_current_word(&self, next: Coordinate) -> Self {
        let grown = self.last_word().extended(next);
        let mut words = self.words.clone();
        words[self.words.len() - 1] = grown;
        Self { words }
    }

    /// The chain with its current word committed as complete and a new
    /// word opened on the shared letter
    ///
    /// `next` both finishes the current word and seeds the next one, so
    /// the chaining rule (each word starts where the previous one ended)
    /// holds by construction.
    #[must_use]
    pub fn complete_word_and_start_next(&self, next: Coordinate) -> Self {
        let completed = self.last_word().extended(next);
        let opened = Word::starting_at(completed.puzzle(), next);
        let mut words = self.words.clone();
        words[self.words.len() - 1] = completed;
        words.push(opened);
        Self { words }
    }

    /// Letters used by the completed words, i.e. every word except the one
    /// still being typed
    #[must_use]
    pub fn letters_in_completed_words(&self) -> FxHashSet<char> {
        let mut used = FxHashSet::default();
        for word in &self.words[..self.words.len() - 1] {
            used.extend(word.text().chars());
        }
        used
    }

    /// Every cell touched by any word of the chain
    #[must_use]
    pub fn covered_cells(&self) -> FxHashSet<Coordinate> {
        self.words
            .iter()
            .flat_map(|word| word.coordinates().iter().copied())
            .collect()
    }

    /// True when every cell of the board appears in some word
    #[must_use]
    pub fn covers_every_cell(&self) -> bool {
        self.covered_cells().len() == self.last_word().puzzle().cell_count()
    }
}
