//! Describe the puzzle for one date

use crate::core::LetterCounts;
use crate::puzzle::{Puzzle, generate_puzzle};
use crate::wordlists::WordSource;

/// Everything the `puzzle` command prints
#[derive(Debug, Clone)]
pub struct PuzzleReport {
    pub puzzle: Puzzle,
    pub counts: LetterCounts,
    pub dictionary_size: usize,
    pub common_size: usize,
}

impl PuzzleReport {
    /// Letters that occur more than once, most frequent first
    #[must_use]
    pub fn repeated_letters(&self) -> Vec<(char, usize)> {
        let mut repeated: Vec<(char, usize)> =
            self.counts.iter().filter(|&(_, n)| n > 1).collect();
        repeated.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        repeated
    }
}

/// Generate the puzzle for `date` and gather its statistics
#[must_use]
pub fn describe_puzzle(date: &str, source: &WordSource) -> PuzzleReport {
    let puzzle = generate_puzzle(date, source.common());
    PuzzleReport {
        counts: puzzle.letter_counts(),
        dictionary_size: source.dictionary().len(),
        common_size: source.common().len(),
        puzzle,
    }
}
