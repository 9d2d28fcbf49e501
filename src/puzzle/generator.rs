//! Seeded puzzle generator
//!
//! The only source of randomness is a `ChaCha8Rng` seeded from the date
//! string, so every player sees the same grid on the same day.

use super::Puzzle;
use crate::core::{GRID_SIZE, WORD_LEN, Word};
use chrono::{Local, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

/// Letter filling every cell of the fallback puzzle
pub const FALLBACK_LETTER: u8 = b'A';

const SEED_WORDS: usize = GRID_SIZE / WORD_LEN;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable 64-bit seed for a date string (FNV-1a)
///
/// # Examples
/// ```
/// use par_puzzle::puzzle::seed_for;
///
/// assert_eq!(seed_for("2024-01-01"), seed_for("2024-01-01"));
/// assert_ne!(seed_for("2024-01-01"), seed_for("2024-01-02"));
/// ```
#[must_use]
pub fn seed_for(date: &str) -> u64 {
    date.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Puzzle id for a calendar date (`YYYY-MM-DD`)
#[must_use]
pub fn date_id(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's puzzle id in local time
#[must_use]
pub fn today_id() -> String {
    date_id(Local::now().date_naive())
}

/// Generate the puzzle for `date` from the common-word subset
///
/// Draw order is fixed: five word picks (uniform, with replacement), then
/// one draw per position of a Fisher–Yates shuffle running from the last
/// index down to 1. Fewer than five common words yields
/// [`Puzzle::fallback`].
///
/// # Examples
/// ```
/// use par_puzzle::puzzle::generate_puzzle;
/// use par_puzzle::wordlists::WordSource;
///
/// let source = WordSource::embedded();
/// let a = generate_puzzle("2024-06-01", source.common());
/// let b = generate_puzzle("2024-06-01", source.common());
/// assert_eq!(a, b);
/// assert_eq!(a.seed_words().len(), 5);
/// ```
#[must_use]
pub fn generate_puzzle(date: &str, common_words: &[Word]) -> Puzzle {
    if common_words.len() < SEED_WORDS {
        warn!(
            date,
            available = common_words.len(),
            "not enough common words, using fallback puzzle"
        );
        return Puzzle::fallback(date);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_for(date));

    let seed_words: Vec<Word> = (0..SEED_WORDS)
        .map(|_| common_words[rng.random_range(0..common_words.len())].clone())
        .collect();

    let mut letters = [0u8; GRID_SIZE];
    for (slot, &letter) in letters
        .iter_mut()
        .zip(seed_words.iter().flat_map(|w| w.chars().iter()))
    {
        *slot = letter;
    }

    for i in (1..GRID_SIZE).rev() {
        let j = rng.random_range(0..=i);
        letters.swap(i, j);
    }

    debug!(
        date,
        letters = %String::from_utf8_lossy(&letters),
        "generated puzzle"
    );

    Puzzle::new(date, letters, seed_words)
}
