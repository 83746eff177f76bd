//! Command implementations

pub mod solve;
pub mod words;

pub use solve::{SolveConfig, SolveReport, solve_puzzle};
pub use words::{WordsReport, words_under};
