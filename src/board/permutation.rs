//! Row-commit permutation engine
//!
//! Committing a word moves its five cells, in selection order, into a target
//! row. Row cells the word did not claim are evicted into the cells the
//! incoming letters vacated.
//!
//! # Algorithm
//! 1. Snapshot the board; every read below comes from the snapshot.
//! 2. `target[i] <- source[i]` for `i in 0..5` (the word, in selection order).
//! 3. Classify: *stayers* are in both sets, *incomers* only in `source`,
//!    *evictees* only in `target`. Incomers and evictees always pair up
//!    one-to-one.
//! 4. Zip evictees with incomers in collection order and write each
//!    evictee's old content into its incomer's vacated cell.
//!
//! Serial pairwise swapping is not equivalent: with overlapping sets a
//! later swap can undo an earlier placement (e.g. source `[1, 0, ..]` into
//! row 0).

use super::Board;
use crate::core::{GRID_SIZE, ROWS, WORD_LEN, row_indices};
use tracing::debug;

/// Result of committing a submission into a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Board after the commit
    pub board: Board,
    /// Cells the word now occupies (always the target row, in order)
    pub destination: [usize; WORD_LEN],
}

/// Commit the word at `source` into row `target_row`
///
/// # Panics
/// Panics if `target_row >= 5`, if any source index is `>= 25`, or if the
/// source indices are not distinct. These are caller contract violations.
///
/// # Examples
/// ```
/// use par_puzzle::board::{Board, swap_rows_for_submission};
///
/// let board = Board::identity(b"ABCDEFGHIJKLMNOPQRSTUVWXY");
/// let outcome = swap_rows_for_submission(&board, &[5, 6, 7, 8, 9], 0);
///
/// assert_eq!(outcome.board.row(0), "FGHIJ");
/// assert_eq!(outcome.board.row(1), "ABCDE");
/// assert_eq!(outcome.destination, [0, 1, 2, 3, 4]);
/// ```
#[must_use]
pub fn swap_rows_for_submission(
    board: &Board,
    source: &[usize; WORD_LEN],
    target_row: usize,
) -> CommitOutcome {
    assert!(target_row < ROWS, "target row {target_row} out of range");
    for (i, &index) in source.iter().enumerate() {
        assert!(index < GRID_SIZE, "source index {index} out of range");
        assert!(
            !source[..i].contains(&index),
            "source index {index} selected twice"
        );
    }

    let snapshot = board.clone();
    let target = row_indices(target_row);
    let mut next = board.clone();

    for (&t, &s) in target.iter().zip(source) {
        next.letters[t] = snapshot.letters[s];
        next.original_index[t] = snapshot.original_index[s];
    }

    let incomers = source.iter().filter(|&&idx| !target.contains(&idx));
    let evictees = target.iter().filter(|&&idx| !source.contains(&idx));

    let mut moved = 0;
    for (&dest, &from) in incomers.zip(evictees) {
        next.letters[dest] = snapshot.letters[from];
        next.original_index[dest] = snapshot.original_index[from];
        moved += 1;
    }

    debug!(
        ?source,
        target_row,
        stayers = WORD_LEN - moved,
        evicted = moved,
        row = %next.row(target_row),
        "committed submission"
    );
    debug_assert!(next.is_permutation());

    CommitOutcome {
        board: next,
        destination: target,
    }
}

impl Board {
    /// Method form of [`swap_rows_for_submission`]
    ///
    /// # Panics
    /// Same preconditions as [`swap_rows_for_submission`].
    #[must_use]
    pub fn commit(&self, source: &[usize; WORD_LEN], target_row: usize) -> CommitOutcome {
        swap_rows_for_submission(self, source, target_row)
    }
}
