//! Multiset check of a candidate word against the live board

use crate::core::LetterCounts;
use thiserror::Error;
use tracing::debug;

/// Why a submission was refused
///
/// These are reported outcomes for the player, never panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Fewer than five cells were selected
    #[error("Too short")]
    TooShort,
    /// The word is not in the accepted-word set
    #[error("Not in dictionary")]
    NotInDictionary,
    /// The same word was already accepted this session
    #[error("Already used")]
    AlreadyUsed,
    /// The word needs more of a letter than the board holds
    #[error("Board missing {letter} (need {needed}, have {available})")]
    BoardMismatch {
        letter: char,
        needed: usize,
        available: usize,
    },
    /// A selected cell was captured by an earlier word
    #[error("Cell {0} is already captured")]
    LockedCell(usize),
    /// The session is loading, finished, or not in standard mode
    #[error("Submissions are not accepted right now")]
    NotPlayable,
}

/// Check that `board_letters` can supply every letter of `word`
///
/// # Errors
/// Returns [`SubmitError::BoardMismatch`] naming the first letter (A–Z
/// order) the board cannot supply in the required quantity.
///
/// # Examples
/// ```
/// use par_puzzle::scoring::{SubmitError, validate_submission};
///
/// assert!(validate_submission("CAB", b"ABCDE").is_ok());
/// assert!(matches!(
///     validate_submission("ABBEY", b"ABCDE"),
///     Err(SubmitError::BoardMismatch { letter: 'B', .. })
/// ));
/// ```
pub fn validate_submission(word: &str, board_letters: &[u8]) -> Result<(), SubmitError> {
    let board = LetterCounts::from_letters(board_letters);
    let need = LetterCounts::from_letters(word.as_bytes());

    match board.first_shortfall(&need) {
        None => Ok(()),
        Some(shortfall) => {
            debug!(word, letter = %shortfall.letter, "board cannot supply word");
            Err(SubmitError::BoardMismatch {
                letter: shortfall.letter,
                needed: shortfall.needed,
                available: shortfall.available,
            })
        }
    }
}
