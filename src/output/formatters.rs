//! Formatting utilities for terminal output

/// Format a solution chain with arrows between words
#[must_use]
pub fn format_chain(words: &[String]) -> String {
    words
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Format a solution chain with its position in the result list
#[must_use]
pub fn format_numbered_chain(number: usize, words: &[String]) -> String {
    format!("{number}. {}", format_chain(words))
}

/// Total letters spelled across a chain
#[must_use]
pub fn chain_letter_count(words: &[String]) -> usize {
    words.iter().map(String::len).sum()
}

/// Percentage drop from `before` to `after`
#[must_use]
pub fn reduction_percent(before: usize, after: usize) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (before.saturating_sub(after) as f64 / before as f64) * 100.0
}
