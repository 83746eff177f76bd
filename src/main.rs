//! Letter Boxed solver - CLI
//!
//! Solves "Letter Boxed" style puzzles against a word-list file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letterboxed::{
    commands::{SolveConfig, solve_puzzle, words_under},
    dictionary::{Trie, loader::load_from_file},
    output::{print_solve_report, print_words_report},
};

#[derive(Parser)]
#[command(
    name = "letterboxed",
    about = "Letter Boxed puzzle solver using a trie-pruned breadth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle given its sides
    Solve {
        /// Puzzle sides as lowercase letter groups, e.g. `tul dca rph nes`
        #[arg(required = true)]
        sides: Vec<String>,

        /// Most words allowed in an answer chain
        #[arg(short, long, default_value = "5")]
        max_words: usize,

        /// Show search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// List dictionary words under a prefix
    Words {
        /// Prefix to look up
        prefix: String,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_from_file(&cli.wordlist)
        .with_context(|| format!("Failed to read word list {}", cli.wordlist))?;

    match cli.command {
        Commands::Solve {
            sides,
            max_words,
            verbose,
        } => run_solve_command(sides, max_words, verbose, &dictionary),
        Commands::Words { prefix, limit } => {
            let report = words_under(&prefix, &dictionary);
            print_words_report(&report, limit);
            Ok(())
        }
    }
}

fn run_solve_command(
    sides: Vec<String>,
    max_words: usize,
    verbose: bool,
    dictionary: &Trie,
) -> Result<()> {
    let mut config = SolveConfig::new(sides, max_words);
    config.progress = true;

    let report = solve_puzzle(&config, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_report(&report, verbose);
    Ok(())
}
