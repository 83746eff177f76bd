//! Display functions for command results

use super::formatters::{format_chain, format_sides};
use crate::commands::{SolveReport, WordsReport};
use colored::Colorize;

/// Print the outcome of a solve run
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {}",
        format_sides(&report.sides).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &report.solution {
        Some(words) => {
            println!("\n{}", format_chain(words).bright_green().bold());
            println!(
                "\n{}",
                format!("✅ Solved in {} words!", words.len()).green().bold()
            );
        }
        None => {
            println!(
                "\n{}",
                "❌ No solution within the word limit".red().bold()
            );
        }
    }

    if verbose {
        println!("\n  Board cells:   {}", report.cell_count);
        if let Some(words) = &report.solution {
            // chained words share their boundary letters
            let typed = words.iter().map(String::len).sum::<usize>() - (words.len() - 1);
            println!("  Letters typed: {typed}");
        }
        println!("  Search depth:  {} letters", report.depth);
        println!("  Time taken:    {:.2}s", report.duration.as_secs_f64());
    }
}

/// Print a dictionary prefix listing
pub fn print_words_report(report: &WordsReport, limit: Option<usize>) {
    let shown = limit.unwrap_or(report.words.len()).min(report.words.len());

    println!(
        "\n{} of {} dictionary words start with '{}'",
        report.words.len().to_string().bright_yellow().bold(),
        report.dictionary_size,
        report.prefix.bold()
    );

    for word in &report.words[..shown] {
        println!("  {word}");
    }
    if shown < report.words.len() {
        println!("  … and {} more", report.words.len() - shown);
    }
}
