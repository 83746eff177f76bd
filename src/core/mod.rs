//! Core domain types
//!
//! The puzzle board, its letter-cell coordinates, and the immutable
//! word/answer values the search builds from them. All types here are pure
//! values with structural equality.

mod answer;
mod puzzle;
mod word;

pub use answer::Answer;
pub use puzzle::{Coordinate, Puzzle, PuzzleError};
pub use word::Word;
