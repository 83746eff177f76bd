//! Breadth-first search for the shortest word chain
//!
//! The frontier holds structurally distinct partial chains, all at the
//! same letter depth. Every level appends one cell to every chain, so the
//! first complete chains surface in letter order; the engine then keeps
//! searching deeper (see [`Solver::shortest_answer_observed`]) so a chain
//! with fewer, longer words still wins.

use super::expansion::expand_frontier;
use crate::core::{Answer, Puzzle, Word};
use crate::dictionary::Trie;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for solver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The word-count ceiling must be at least one.
    ZeroWordLimit,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLimit => write!(f, "word limit must be at least 1"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Frontier statistics reported after each search level
#[derive(Debug, Clone, Copy)]
pub struct SearchProgress {
    /// Letters placed per chain so far (the current level).
    pub depth: usize,
    /// Structurally distinct chains alive at this level.
    pub frontier_size: usize,
    /// Word count of the best complete chain found so far, if any.
    pub best_word_count: Option<usize>,
}

/// Shortest-chain solver for one board and one dictionary
///
/// Borrows both; neither is mutated during a solve, so a solver can be
/// rerun or shared freely.
pub struct Solver<'p> {
    puzzle: &'p Puzzle,
    dictionary: &'p Trie,
    max_words: usize,
}

impl<'p> Solver<'p> {
    /// Create a solver with a word-count ceiling.
    ///
    /// # Errors
    /// Returns `SolverError::ZeroWordLimit` if `max_words` is zero. Board
    /// shape is validated by [`Puzzle::new`], so a solver only ever sees a
    /// well-formed board.
    pub fn new(
        puzzle: &'p Puzzle,
        dictionary: &'p Trie,
        max_words: usize,
    ) -> Result<Self, SolverError> {
        if max_words == 0 {
            return Err(SolverError::ZeroWordLimit);
        }
        Ok(Self {
            puzzle,
            dictionary,
            max_words,
        })
    }

    /// Find the chain with the fewest words that covers every cell of the
    /// board, or `None` when no chain within the word limit does.
    #[must_use]
    pub fn shortest_answer(&self) -> Option<Answer<'p>> {
        self.shortest_answer_observed(|_| {})
    }

    /// Like [`Solver::shortest_answer`], invoking `observe` with frontier
    /// statistics after every level.
    ///
    /// The search does not stop at the first complete chain: a chain with
    /// fewer words can complete at a deeper letter level (longer words,
    /// fewer of them). The best chain so far is kept, chains that can no
    /// longer beat it are dropped, and the frontier runs dry before the
    /// best is returned. Ties on word count are broken arbitrarily.
    pub fn shortest_answer_observed<F>(&self, mut observe: F) -> Option<Answer<'p>>
    where
        F: FnMut(SearchProgress),
    {
        let mut frontier = self.seed_frontier();
        let mut best: Option<Answer<'p>> = None;
        let mut depth = 1;

        while !frontier.is_empty() {
            depth += 1;
            frontier = expand_frontier(self.dictionary, self.max_words, &frontier);

            for answer in &frontier {
                if self.is_complete(answer)
                    && best
                        .as_ref()
                        .is_none_or(|b| answer.word_count() < b.word_count())
                {
                    best = Some(answer.clone());
                }
            }

            if let Some(found) = &best {
                // Completing a chain never lowers its word count, so only
                // strictly shorter chains can still win.
                let ceiling = found.word_count();
                frontier.retain(|answer| answer.word_count() < ceiling);
            }

            observe(SearchProgress {
                depth,
                frontier_size: frontier.len(),
                best_word_count: best.as_ref().map(Answer::word_count),
            });
        }

        best
    }

    /// One single-letter chain per cell of the board
    fn seed_frontier(&self) -> FxHashSet<Answer<'p>> {
        self.puzzle
            .coordinates()
            .map(|start| Answer::opening(Word::starting_at(self.puzzle, start)))
            .collect()
    }

    /// Complete: every cell covered and the word being typed is a real
    /// dictionary word
    fn is_complete(&self, answer: &Answer<'p>) -> bool {
        answer.covers_every_cell() && self.dictionary.contains(&answer.last_word().text())
    }
}
