//! A word as a path of letter cells
//!
//! A `Word` is the sequence of cells typed consecutively on one board. Its
//! text is derived from the path on demand and never stored separately.

use super::{Coordinate, Puzzle};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A non-empty run of coordinates on one board
///
/// Consecutive coordinates reference different sides. Words don't own the
/// board; they share a reference to it. Equality and hashing cover the
/// coordinate path only, since every word in one search reads the same
/// board.
#[derive(Debug, Clone)]
pub struct Word<'p> {
    puzzle: &'p Puzzle,
    path: Vec<Coordinate>,
}

impl<'p> Word<'p> {
    /// A one-letter word starting at `start`
    #[must_use]
    pub fn starting_at(puzzle: &'p Puzzle, start: Coordinate) -> Self {
        Self {
            puzzle,
            path: vec![start],
        }
    }

    /// This word with one more cell appended
    ///
    /// Callers keep the different-sides rule; debug builds assert it.
    #[must_use]
    pub fn extended(&self, next: Coordinate) -> Self {
        debug_assert_ne!(
            self.last().side,
            next.side,
            "consecutive letters must come from different sides"
        );
        let mut path = self.path.clone();
        path.push(next);
        Self {
            puzzle: self.puzzle,
            path,
        }
    }

    /// The board this word is typed on
    #[inline]
    #[must_use]
    pub fn puzzle(&self) -> &'p Puzzle {
        self.puzzle
    }

    /// The cell this word starts on
    #[inline]
    #[must_use]
    pub fn first(&self) -> Coordinate {
        self.path[0]
    }

    /// The cell this word currently ends on
    #[inline]
    #[must_use]
    pub fn last(&self) -> Coordinate {
        self.path[self.path.len() - 1]
    }

    /// Number of cells typed
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.path.len()
    }

    /// The full coordinate path
    #[inline]
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.path
    }

    /// The letters along the path, concatenated
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::{Coordinate, Puzzle, Word};
    ///
    /// let puzzle = Puzzle::new(&["ab", "cd"]).unwrap();
    /// let word = Word::starting_at(&puzzle, Coordinate::new(0, 0))
    ///     .extended(Coordinate::new(1, 1))
    ///     .extended(Coordinate::new(0, 1));
    /// assert_eq!(word.text(), "adb");
    /// ```
    #[must_use]
    pub fn text(&self) -> String {
        self.path.iter().map(|&at| self.puzzle.letter(at)).collect()
    }
}

impl PartialEq for Word<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Word<'_> {}

impl Hash for Word<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
