//! Letter Boxed solver
//!
//! Finds the shortest chain of dictionary words covering every letter cell
//! of a "Letter Boxed" style puzzle: consecutive letters must come from
//! different sides, and each word starts on the letter that ended the
//! previous one.
//!
//! # Quick Start
//!
//! ```rust
//! use letterboxed::core::Puzzle;
//! use letterboxed::dictionary::loader::trie_from_words;
//! use letterboxed::solver::Solver;
//!
//! let puzzle = Puzzle::new(&["ab", "cd"]).unwrap();
//! let dictionary = trie_from_words(["acbd"]);
//!
//! let solver = Solver::new(&puzzle, &dictionary, 3).unwrap();
//! let answer = solver.shortest_answer().unwrap();
//! let words: Vec<String> = answer.words().iter().map(|w| w.text()).collect();
//! assert_eq!(words, ["acbd"]);
//! ```

// Core domain types
pub mod core;

// Dictionary storage and loading
pub mod dictionary;

// Search engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
