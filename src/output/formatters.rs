//! Formatting utilities for terminal output

/// Format an answer chain as `WORD → WORD → WORD`
#[must_use]
pub fn format_chain(words: &[String]) -> String {
    words
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Format puzzle sides as `TUL · DCA · RPH · NES`
#[must_use]
pub fn format_sides(sides: &[String]) -> String {
    sides
        .iter()
        .map(|side| side.to_uppercase())
        .collect::<Vec<_>>()
        .join(" · ")
}
