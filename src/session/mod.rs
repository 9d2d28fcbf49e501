//! Session controller
//!
//! [`GameSession`] owns the puzzle, the live board, the selection and the
//! accepted submissions, and is the only place they change. Standard mode
//! commits words through the permutation engine; hard mode exchanges cells
//! on a [`HardBoard`].

mod controller;
mod hard;
mod selection;

pub use controller::{GameSession, SubmitOutcome};
pub use hard::{ExchangeToken, HardBoard, HardClick, ScheduledExchange};
pub use selection::Selection;

use crate::core::{WORD_LEN, Word};
use std::fmt;
use thiserror::Error;

/// Ruleset in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Standard,
    Hard,
}

impl Mode {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Standard => Self::Hard,
            Self::Hard => Self::Standard,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Puzzle and dictionary not yet available
    Loading,
    /// Accepting selections
    Ready,
    /// Finished for the day
    Complete,
}

/// An accepted word and the cells it now occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub word: Word,
    pub source_indices: [usize; WORD_LEN],
}

/// What a cell click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// Added to the end of the selection
    Appended,
    /// Was the last selected cell and was dropped
    Removed,
    /// Already selected but not last; order is kept
    Unchanged,
    /// Hard mode: became the anchor
    Anchored,
    /// Hard mode: anchor clicked again
    Released,
    /// Hard mode: exchange with the anchor is pending
    ExchangeScheduled(ExchangeToken),
}

/// Why a cell click was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("The game is not accepting moves")]
    NotPlayable,
    #[error("Cell {0} is off the board")]
    OutOfRange(usize),
    #[error("Cell {0} is already captured")]
    Locked(usize),
    #[error("Five cells are already selected")]
    SelectionFull,
}
