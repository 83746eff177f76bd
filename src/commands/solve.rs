//! Puzzle solving command
//!
//! Runs the solver over one puzzle and reports the outcome.

use crate::core::Puzzle;
use crate::dictionary::Trie;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration for one solve run
pub struct SolveConfig {
    pub sides: Vec<String>,
    pub max_words: usize,
    /// Show a live spinner with frontier statistics while searching.
    pub progress: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(sides: Vec<String>, max_words: usize) -> Self {
        Self {
            sides,
            max_words,
            progress: false,
        }
    }
}

/// Outcome of one solve run
pub struct SolveReport {
    pub sides: Vec<String>,
    /// The winning chain in order, or `None` when no chain within the
    /// word limit covers the board.
    pub solution: Option<Vec<String>>,
    /// Letter cells on the board.
    pub cell_count: usize,
    /// Deepest letter level the search reached.
    pub depth: usize,
    pub duration: Duration,
}

/// Solve one puzzle against the given dictionary.
///
/// # Errors
///
/// Returns an error if the sides do not form a valid board or the word
/// limit is zero. Finding no solution is a successful report, not an
/// error.
pub fn solve_puzzle(config: &SolveConfig, dictionary: &Trie) -> Result<SolveReport, String> {
    let puzzle = Puzzle::new(&config.sides).map_err(|e| format!("Invalid puzzle: {e}"))?;
    let solver = Solver::new(&puzzle, dictionary, config.max_words)
        .map_err(|e| format!("Invalid configuration: {e}"))?;

    let bar = if config.progress {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template("{spinner} {msg}").expect("static template"));
        bar
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut depth = 1;
    let answer = solver.shortest_answer_observed(|progress| {
        depth = progress.depth;
        bar.set_message(format!(
            "depth {} | {} candidate chains",
            progress.depth, progress.frontier_size
        ));
        bar.tick();
    });
    let duration = start.elapsed();
    bar.finish_and_clear();

    let solution =
        answer.map(|found| found.words().iter().map(|word| word.text()).collect());

    Ok(SolveReport {
        sides: config.sides.clone(),
        solution,
        cell_count: puzzle.cell_count(),
        depth,
        duration,
    })
}
