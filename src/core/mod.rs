//! Core domain types for the capture grid
//!
//! Letters, words and the fixed grid geometry. Everything here is pure and
//! independent of the session or any front end.

mod letters;
mod word;

pub use letters::{LetterCounts, Shortfall};
pub use word::{Word, WordError};

/// Letters in every word
pub const WORD_LEN: usize = 5;

/// Rows (and columns) in the grid
pub const ROWS: usize = 5;

/// Cells in the grid
pub const GRID_SIZE: usize = ROWS * WORD_LEN;

/// The fixed alphabet, in order
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Indices of the cells forming `row`, left to right
///
/// # Panics
/// Panics if `row >= ROWS`
#[must_use]
pub fn row_indices(row: usize) -> [usize; WORD_LEN] {
    assert!(row < ROWS, "row {row} out of range 0..{ROWS}");
    std::array::from_fn(|i| row * WORD_LEN + i)
}
