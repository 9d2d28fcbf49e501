//! Board state and the row-commit permutation engine

mod permutation;
mod state;

pub use permutation::{CommitOutcome, swap_rows_for_submission};
pub use state::{Board, BoardShapeError};
