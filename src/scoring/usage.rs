//! Letter accountant
//!
//! Letters are "captured, not merely used": a letter only counts towards
//! completion up to the number of times it appears in the puzzle.

use crate::core::{GRID_SIZE, LetterCounts};

/// Cumulative accounting over a sequence of accepted words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterUsage {
    /// Occurrences of each letter in the puzzle
    pub puzzle_counts: LetterCounts,
    /// Occurrences of each letter across all submitted words
    pub used_counts: LetterCounts,
    /// `min(used, puzzle)` per letter
    pub captured_counts: LetterCounts,
    /// Total letters submitted
    pub score: usize,
    /// All 25 puzzle letters captured
    pub is_complete: bool,
}

/// Compute capture, score and completion for `submitted_words`
///
/// # Examples
/// ```
/// use par_puzzle::scoring::calculate_letter_usage;
///
/// let usage = calculate_letter_usage(b"ABCDEFGHIJKLMNOPQRSTUVWXY", &["ABCDE", "AAAAA"]);
/// assert_eq!(usage.score, 10);
/// assert_eq!(usage.captured_counts.get(b'A'), 1);
/// assert!(!usage.is_complete);
/// ```
#[must_use]
pub fn calculate_letter_usage<S: AsRef<str>>(
    puzzle_letters: &[u8],
    submitted_words: &[S],
) -> LetterUsage {
    let puzzle_counts = LetterCounts::from_letters(puzzle_letters);

    let mut used_counts = LetterCounts::default();
    let mut score = 0;
    for word in submitted_words {
        let word = word.as_ref();
        for letter in word.bytes() {
            used_counts.add(letter);
        }
        score += word.len();
    }

    let captured_counts = used_counts.capped_by(&puzzle_counts);

    LetterUsage {
        puzzle_counts,
        used_counts,
        captured_counts,
        score,
        is_complete: captured_counts.total() == GRID_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALPHABET;

    const PUZZLE: &[u8; 25] = b"ABCDEFGHIJKLMNOPQRSTUVWXY";

    #[test]
    fn empty_history() {
        let usage = calculate_letter_usage::<&str>(PUZZLE, &[]);
        assert_eq!(usage.score, 0);
        assert_eq!(usage.captured_counts.total(), 0);
        assert!(!usage.is_complete);
        assert_eq!(usage.puzzle_counts.total(), 25);
    }

    #[test]
    fn full_capture_completes() {
        let words = ["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY"];
        let usage = calculate_letter_usage(PUZZLE, &words);
        assert!(usage.is_complete);
        assert_eq!(usage.score, 25);
    }

    #[test]
    fn overuse_is_capped() {
        let words = ["AAAAA", "AAAAA", "ABCDE"];
        let usage = calculate_letter_usage(PUZZLE, &words);

        assert_eq!(usage.used_counts.get(b'A'), 11);
        assert_eq!(usage.captured_counts.get(b'A'), 1);
        assert_eq!(usage.captured_counts.total(), 5);
        assert_eq!(usage.score, 15);
        for &letter in ALPHABET {
            assert!(usage.captured_counts.get(letter) <= usage.puzzle_counts.get(letter));
        }
    }

    #[test]
    fn overuse_cannot_fake_completion() {
        // Thirty letters submitted, but Y is never used
        let words = ["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXA", "UVWXA"];
        let usage = calculate_letter_usage(PUZZLE, &words);
        assert_eq!(usage.score, 30);
        assert_eq!(usage.captured_counts.total(), 24);
        assert!(!usage.is_complete);
    }

    #[test]
    fn letters_absent_from_puzzle_capture_nothing() {
        let usage = calculate_letter_usage(b"AAAAAAAAAAAAAAAAAAAAAAAAA", &["ZEBRA"]);
        assert_eq!(usage.captured_counts.total(), 1);
        assert_eq!(usage.captured_counts.get(b'Z'), 0);
    }
}
