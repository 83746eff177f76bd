//! Legal continuations of a partial answer
//!
//! One frontier step appends one letter cell. For a candidate cell on a
//! different side, the grown text may stay a viable prefix, may land on a
//! complete dictionary word, or both at once; each case emits its own
//! successor chain.

use crate::core::{Answer, Coordinate};
use crate::dictionary::Trie;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// All legal one-cell continuations of `answer`
///
/// A chain already past the word ceiling produces nothing.
pub(crate) fn continuations<'p>(
    dictionary: &Trie,
    max_words: usize,
    answer: &Answer<'p>,
) -> Vec<Answer<'p>> {
    if answer.word_count() > max_words {
        return Vec::new();
    }

    let puzzle = answer.last_word().puzzle();
    let current = answer.last_coordinate();
    let used = answer.letters_in_completed_words();
    let mut moves = Vec::new();

    for side in 0..puzzle.side_count() {
        if side == current.side {
            continue;
        }
        for cell in 0..puzzle.side_len(side) {
            let next = Coordinate::new(side, cell);
            let mut text = answer.last_word().text();
            text.push(puzzle.letter(next));

            if dictionary.has_prefix(&text) {
                moves.push(answer.extend_current_word(next));
            }
            if dictionary.contains(&text) && text.chars().any(|ch| !used.contains(&ch)) {
                // The finished word pulls in a letter no earlier word
                // used, so committing it can still help coverage.
                moves.push(answer.complete_word_and_start_next(next));
            }
        }
    }

    moves
}

/// One breadth-first level: every chain's continuations, merged into a
/// structurally deduplicated next frontier
///
/// Each chain expands independently and the result never depends on
/// expansion order, so the fan-out runs on the rayon pool.
pub(crate) fn expand_frontier<'p>(
    dictionary: &Trie,
    max_words: usize,
    frontier: &FxHashSet<Answer<'p>>,
) -> FxHashSet<Answer<'p>> {
    frontier
        .par_iter()
        .flat_map_iter(|answer| continuations(dictionary, max_words, answer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Puzzle, Word};
    use crate::dictionary::loader::trie_from_words;

    fn at(side: usize, cell: usize) -> Coordinate {
        Coordinate::new(side, cell)
    }

    fn seed<'p>(puzzle: &'p Puzzle, start: Coordinate) -> Answer<'p> {
        Answer::opening(Word::starting_at(puzzle, start))
    }

    #[test]
    fn candidates_never_come_from_the_current_side() {
        let puzzle = Puzzle::new(&["ab", "cd"]).unwrap();
        let dictionary = trie_from_words(["acbd", "adbc"]);

        let moves = continuations(&dictionary, 5, &seed(&puzzle, at(0, 0)));
        assert!(!moves.is_empty());
        for answer in &moves {
            assert_ne!(answer.last_coordinate().side, 0);
        }
    }

    #[test]
    fn non_prefix_extensions_are_dropped() {
        let puzzle = Puzzle::new(&["ab", "cd"]).unwrap();
        let dictionary = trie_from_words(["acbd"]);

        // from 'a', only 'c' keeps a viable prefix; 'd' gives "ad"
        let moves = continuations(&dictionary, 5, &seed(&puzzle, at(0, 0)));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].last_word().text(), "ac");
    }

    #[test]
    fn a_complete_word_emits_both_successors() {
        let puzzle = Puzzle::new(&["ab", "cd"]).unwrap();
        // "ac" is a word and also a prefix of "acbd"
        let dictionary = trie_from_words(["acb", "acbd"]);

        let start = seed(&puzzle, at(0, 0)).extend_current_word(at(1, 0));
        let moves = continuations(&dictionary, 5, &start);

        // one candidate cell ('b') fires twice: keep typing "acb...", or
        // commit "acb" and open the next word on 'b'
        assert_eq!(moves.len(), 2);
        assert!(
            moves
                .iter()
                .any(|a| a.word_count() == 1 && a.last_word().text() == "acb")
        );
        assert!(
            moves
                .iter()
                .any(|a| a.word_count() == 2 && a.last_word().text() == "b")
        );
    }

    #[test]
    fn ceiling_blocks_further_growth() {
        let puzzle = Puzzle::new(&["ab", "cd"]).unwrap();
        let dictionary = trie_from_words(["acb", "bdc"]);

        // two words already: "acb" committed plus the opened "b"
        let over = seed(&puzzle, at(0, 0))
            .extend_current_word(at(1, 0))
            .complete_word_and_start_next(at(0, 1));
        assert_eq!(over.word_count(), 2);

        assert!(continuations(&dictionary, 1, &over).is_empty());
        assert!(!continuations(&dictionary, 2, &over).is_empty());
    }

    #[test]
    fn words_adding_no_new_letter_are_not_committed() {
        let puzzle = Puzzle::new(&["ab", "cd"]).unwrap();
        let dictionary = trie_from_words(["acb", "bca"]);

        // "acb" committed, now typing from 'b'
        let chained = seed(&puzzle, at(0, 0))
            .extend_current_word(at(1, 0))
            .complete_word_and_start_next(at(0, 1));

        // "bca" is a real word but only reuses letters of "acb": it may
        // keep growing as a prefix, never commit
        let round1 = continuations(&dictionary, 5, &chained);
        assert_eq!(round1.len(), 1);
        assert_eq!(round1[0].last_word().text(), "bc");

        let round2 = continuations(&dictionary, 5, &round1[0]);
        assert_eq!(round2.len(), 1);
        assert_eq!(round2[0].word_count(), 2);
        assert_eq!(round2[0].last_word().text(), "bca");

        // nothing commits and nothing extends past the dead end
        assert!(continuations(&dictionary, 5, &round2[0]).is_empty());
    }

    #[test]
    fn expand_frontier_deduplicates_structurally() {
        let puzzle = Puzzle::new(&["ab", "cd"]).unwrap();
        let dictionary = trie_from_words(["acbd", "cbda"]);

        let mut frontier = FxHashSet::default();
        for start in puzzle.coordinates() {
            frontier.insert(seed(&puzzle, start));
        }

        let sequential: FxHashSet<Answer> = frontier
            .iter()
            .flat_map(|a| continuations(&dictionary, 5, a))
            .collect();
        let parallel = expand_frontier(&dictionary, 5, &frontier);

        assert_eq!(sequential, parallel);
    }
}
