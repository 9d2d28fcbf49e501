//! Formatting utilities for terminal output

use crate::core::{LetterCounts, WORD_LEN};
use crate::session::Mode;

/// Score with its unit for the active mode
#[must_use]
pub fn score_label(mode: Mode, score: usize) -> String {
    match (mode, score) {
        (Mode::Standard, 1) => "1 letter".to_string(),
        (Mode::Standard, n) => format!("{n} letters"),
        (Mode::Hard, 1) => "1 swap".to_string(),
        (Mode::Hard, n) => format!("{n} swaps"),
    }
}

/// One-based label of a cell, as typed in the line-oriented front end
#[must_use]
pub fn cell_label(index: usize) -> String {
    format!("{:>2}", index + 1)
}

/// Letters spaced out for a grid row
#[must_use]
pub fn spaced(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&c| char::from(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Row label of a five-cell block: `A`..`E`
#[must_use]
pub fn row_label(index: usize) -> char {
    char::from(b'A' + (index / WORD_LEN) as u8)
}

/// Captured out of available for every letter in the puzzle
///
/// # Examples
/// ```
/// use par_puzzle::core::LetterCounts;
/// use par_puzzle::output::formatters::capture_summary;
///
/// let puzzle = LetterCounts::from_letters(b"AAB");
/// let captured = LetterCounts::from_letters(b"A");
/// assert_eq!(capture_summary(&puzzle, &captured), "A 1/2  B 0/1");
/// ```
#[must_use]
pub fn capture_summary(puzzle: &LetterCounts, captured: &LetterCounts) -> String {
    puzzle
        .iter()
        .map(|(letter, total)| format!("{letter} {}/{total}", captured.get(letter as u8)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_labels() {
        assert_eq!(score_label(Mode::Standard, 15), "15 letters");
        assert_eq!(score_label(Mode::Standard, 1), "1 letter");
        assert_eq!(score_label(Mode::Hard, 0), "0 swaps");
        assert_eq!(score_label(Mode::Hard, 1), "1 swap");
    }

    #[test]
    fn cell_and_row_labels() {
        assert_eq!(cell_label(0), " 1");
        assert_eq!(cell_label(24), "25");
        assert_eq!(row_label(0), 'A');
        assert_eq!(row_label(13), 'C');
        assert_eq!(spaced(b"CRANE"), "C R A N E");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
