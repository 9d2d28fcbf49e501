//! Daily puzzle generation
//!
//! A puzzle is the immutable 25-letter bag for one calendar date together with
//! the five words it was built from.

mod generator;

pub use generator::{FALLBACK_LETTER, date_id, generate_puzzle, seed_for, today_id};

use crate::core::{GRID_SIZE, LetterCounts, Word};

/// The date-derived, immutable letter bag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    id: String,
    letters: [u8; GRID_SIZE],
    seed_words: Vec<Word>,
}

impl Puzzle {
    #[must_use]
    pub fn new(id: impl Into<String>, letters: [u8; GRID_SIZE], seed_words: Vec<Word>) -> Self {
        Self {
            id: id.into(),
            letters,
            seed_words,
        }
    }

    /// Placeholder puzzle used when too few common words are available
    #[must_use]
    pub fn fallback(id: impl Into<String>) -> Self {
        Self::new(id, [FALLBACK_LETTER; GRID_SIZE], Vec::new())
    }

    /// Date string this puzzle belongs to
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn letters(&self) -> &[u8; GRID_SIZE] {
        &self.letters
    }

    #[must_use]
    pub fn seed_words(&self) -> &[Word] {
        &self.seed_words
    }

    /// False for the fallback puzzle
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.seed_words.is_empty()
    }

    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::from_letters(&self.letters)
    }
}
