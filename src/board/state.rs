//! Board representation
//!
//! `letters[i]` is the letter shown in visual cell `i`; `original_index[i]`
//! names the puzzle-generation slot currently occupying that cell. Both are
//! only ever rearranged, never rewritten with new content.

use crate::core::{GRID_SIZE, ROWS, WORD_LEN, row_indices};
use std::fmt;
use thiserror::Error;

/// The permutable arrangement of a puzzle's letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(super) letters: [u8; GRID_SIZE],
    pub(super) original_index: [usize; GRID_SIZE],
}

/// Why raw parts could not form a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardShapeError {
    #[error("expected {GRID_SIZE} letters, got {0}")]
    LetterCount(usize),
    #[error("expected {GRID_SIZE} original indices, got {0}")]
    IndexCount(usize),
    #[error("cell letter {0:?} is not A-Z")]
    InvalidLetter(char),
    #[error("original indices are not a permutation of 0..{GRID_SIZE}")]
    NotAPermutation,
}

impl Board {
    /// Identity arrangement of `letters`
    #[must_use]
    pub fn identity(letters: &[u8; GRID_SIZE]) -> Self {
        Self {
            letters: *letters,
            original_index: std::array::from_fn(|i| i),
        }
    }

    /// Rebuild a board from persisted parts
    ///
    /// # Errors
    /// Returns `BoardShapeError` when either sequence has the wrong length,
    /// a letter is outside A–Z, or the indices are not a permutation.
    pub fn from_parts(letters: &[char], original_index: &[usize]) -> Result<Self, BoardShapeError> {
        if letters.len() != GRID_SIZE {
            return Err(BoardShapeError::LetterCount(letters.len()));
        }
        if original_index.len() != GRID_SIZE {
            return Err(BoardShapeError::IndexCount(original_index.len()));
        }

        let mut cells = [0u8; GRID_SIZE];
        for (cell, &c) in cells.iter_mut().zip(letters) {
            if !c.is_ascii_uppercase() {
                return Err(BoardShapeError::InvalidLetter(c));
            }
            *cell = c as u8;
        }

        let mut origins = [0usize; GRID_SIZE];
        origins.copy_from_slice(original_index);

        let board = Self {
            letters: cells,
            original_index: origins,
        };
        if board.is_permutation() {
            Ok(board)
        } else {
            Err(BoardShapeError::NotAPermutation)
        }
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; GRID_SIZE] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn original_index(&self) -> &[usize; GRID_SIZE] {
        &self.original_index
    }

    /// Letter in cell `index`
    ///
    /// # Panics
    /// Panics if `index >= 25`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, index: usize) -> u8 {
        self.letters[index]
    }

    /// Letters of row `row` as a string
    ///
    /// # Panics
    /// Panics if `row >= 5`
    #[must_use]
    pub fn row(&self, row: usize) -> String {
        row_indices(row)
            .iter()
            .map(|&i| char::from(self.letters[i]))
            .collect()
    }

    /// Letters at `indices`, in order
    #[must_use]
    pub fn read(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .filter_map(|&i| self.letters.get(i))
            .map(|&c| char::from(c))
            .collect()
    }

    /// Whether `original_index` is a permutation of `0..25`
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; GRID_SIZE];
        for &origin in &self.original_index {
            match seen.get_mut(origin) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            let line = self.letters[row * WORD_LEN..(row + 1) * WORD_LEN]
                .iter()
                .map(|&c| char::from(c).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: &[u8; 25] = b"ABCDEFGHIJKLMNOPQRSTUVWXY";

    #[test]
    fn identity_board() {
        let board = Board::identity(LETTERS);
        assert_eq!(board.letters(), LETTERS);
        assert_eq!(board.original_index()[7], 7);
        assert!(board.is_permutation());
        assert_eq!(board.row(1), "FGHIJ");
        assert_eq!(board.read(&[0, 24, 12]), "AYM");
    }

    #[test]
    fn from_parts_round_trips_identity() {
        let letters: Vec<char> = LETTERS.iter().map(|&c| char::from(c)).collect();
        let indices: Vec<usize> = (0..25).collect();
        let board = Board::from_parts(&letters, &indices).unwrap();
        assert_eq!(board, Board::identity(LETTERS));
    }

    #[test]
    fn from_parts_rejects_bad_shapes() {
        let letters: Vec<char> = LETTERS.iter().map(|&c| char::from(c)).collect();
        let indices: Vec<usize> = (0..25).collect();

        assert_eq!(
            Board::from_parts(&letters[..24], &indices),
            Err(BoardShapeError::LetterCount(24))
        );
        assert_eq!(
            Board::from_parts(&letters, &indices[..3]),
            Err(BoardShapeError::IndexCount(3))
        );

        let mut duplicated = indices.clone();
        duplicated[3] = 4;
        assert_eq!(
            Board::from_parts(&letters, &duplicated),
            Err(BoardShapeError::NotAPermutation)
        );

        let mut out_of_range = indices;
        out_of_range[0] = 25;
        assert_eq!(
            Board::from_parts(&letters, &out_of_range),
            Err(BoardShapeError::NotAPermutation)
        );

        let mut lower = letters;
        lower[0] = 'a';
        assert_eq!(
            Board::from_parts(&lower, &(0..25).collect::<Vec<_>>()),
            Err(BoardShapeError::InvalidLetter('a'))
        );
    }

    #[test]
    fn display_prints_rows() {
        let board = Board::identity(LETTERS);
        let text = board.to_string();
        assert_eq!(text.lines().next(), Some("A B C D E"));
        assert_eq!(text.lines().count(), 5);
    }
}
