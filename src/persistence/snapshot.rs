//! Persisted session shape and the rules for trusting it
//!
//! A snapshot is only ever applied whole. Anything that fails a check is
//! discarded in favour of a fresh board and reported, never raised.

use crate::board::{Board, BoardShapeError};
use crate::core::{GRID_SIZE, ROWS, WORD_LEN, Word};
use crate::session::{GameSession, Submission};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Standard-mode progress for one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub date: String,
    #[serde(default)]
    pub submissions: Vec<String>,
    /// Cells each submission occupies; missing in legacy saves
    #[serde(default)]
    pub submission_indices: Vec<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<BoardSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub letters: Vec<char>,
    pub original_index: Vec<usize>,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            letters: board.letters().iter().map(|&c| char::from(c)).collect(),
            original_index: board.original_index().to_vec(),
        }
    }
}

/// Why a snapshot was not applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscardReason {
    #[error("session is still loading")]
    Loading,
    #[error("snapshot is for {found}, today is {expected}")]
    WrongDate { found: String, expected: String },
    #[error("{words} submissions but {indices} index rows")]
    LengthMismatch { words: usize, indices: usize },
    #[error("{0} submissions exceed the {ROWS} rows")]
    TooManySubmissions(usize),
    #[error("submission {0} is not a five-letter word")]
    BadWord(usize),
    #[error("submission {0} does not name {WORD_LEN} distinct cells on the board")]
    BadIndices(usize),
    #[error("submission {0} reuses a cell claimed earlier")]
    OverlappingIndices(usize),
    #[error("saved board is malformed: {0}")]
    BadBoard(#[from] BoardShapeError),
    #[error("saved board letters do not match the puzzle")]
    ForeignLetters,
    #[error("submission {0} does not match the saved board")]
    WordMismatch(usize),
}

/// What [`GameSession::restore`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Progress and board were applied
    Restored { submissions: usize },
    /// Progress was applied on an identity board because none was saved
    FreshBoard { submissions: usize },
    /// Nothing was applied
    Discarded(DiscardReason),
}

impl RestoreOutcome {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        !matches!(self, Self::Discarded(_))
    }
}

impl GameSession {
    /// Capture standard-mode progress
    ///
    /// Returns `None` while loading. Hard-mode progress is not kept, so a
    /// session in hard mode saves an empty standard game on an identity
    /// board.
    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot> {
        let puzzle = self.puzzle()?;
        let board = self.board()?;
        let submissions = self.submissions();
        Some(Snapshot {
            date: puzzle.id().to_string(),
            submissions: submissions.iter().map(|s| s.word.text().to_string()).collect(),
            submission_indices: submissions.iter().map(|s| s.source_indices.to_vec()).collect(),
            board: Some(BoardSnapshot::from(board)),
        })
    }

    /// Apply a saved snapshot if it belongs to today's puzzle and is sound
    ///
    /// The session always ends in standard mode with an empty selection when
    /// the snapshot is applied; otherwise it is left untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) -> RestoreOutcome {
        match self.check(snapshot) {
            Ok((board, submissions)) => {
                let count = submissions.len();
                let fresh = snapshot.board.is_none();
                self.install(board, submissions);
                info!(date = %snapshot.date, submissions = count, fresh, "snapshot restored");
                if fresh {
                    RestoreOutcome::FreshBoard { submissions: count }
                } else {
                    RestoreOutcome::Restored { submissions: count }
                }
            }
            Err(reason) => {
                warn!(date = %snapshot.date, %reason, "discarding saved session");
                RestoreOutcome::Discarded(reason)
            }
        }
    }

    fn check(&self, snapshot: &Snapshot) -> Result<(Board, Vec<Submission>), DiscardReason> {
        let puzzle = self.puzzle().ok_or(DiscardReason::Loading)?;
        if snapshot.date != puzzle.id() {
            return Err(DiscardReason::WrongDate {
                found: snapshot.date.clone(),
                expected: puzzle.id().to_string(),
            });
        }
        if snapshot.submissions.len() != snapshot.submission_indices.len() {
            return Err(DiscardReason::LengthMismatch {
                words: snapshot.submissions.len(),
                indices: snapshot.submission_indices.len(),
            });
        }
        if snapshot.submissions.len() > ROWS {
            return Err(DiscardReason::TooManySubmissions(snapshot.submissions.len()));
        }

        let mut claimed = [false; GRID_SIZE];
        let mut submissions = Vec::with_capacity(snapshot.submissions.len());
        for (n, (text, indices)) in snapshot
            .submissions
            .iter()
            .zip(&snapshot.submission_indices)
            .enumerate()
        {
            let word = Word::new(text.as_str()).map_err(|_| DiscardReason::BadWord(n))?;
            let source_indices = cell_row(indices).ok_or(DiscardReason::BadIndices(n))?;
            for &i in &source_indices {
                if claimed[i] {
                    return Err(DiscardReason::OverlappingIndices(n));
                }
                claimed[i] = true;
            }
            submissions.push(Submission {
                word,
                source_indices,
            });
        }

        let Some(saved) = &snapshot.board else {
            return Ok((Board::identity(puzzle.letters()), submissions));
        };
        let board = Board::from_parts(&saved.letters, &saved.original_index)?;
        if board
            .original_index()
            .iter()
            .zip(board.letters())
            .any(|(&origin, &letter)| puzzle.letters()[origin] != letter)
        {
            return Err(DiscardReason::ForeignLetters);
        }
        for (n, submission) in submissions.iter().enumerate() {
            if board.read(&submission.source_indices) != submission.word.text() {
                return Err(DiscardReason::WordMismatch(n));
            }
        }
        Ok((board, submissions))
    }
}

/// Five distinct on-board cells, or `None`
fn cell_row(indices: &[usize]) -> Option<[usize; WORD_LEN]> {
    let row: [usize; WORD_LEN] = indices.try_into().ok()?;
    let valid = row
        .iter()
        .enumerate()
        .all(|(i, &cell)| cell < GRID_SIZE && !row[..i].contains(&cell));
    valid.then_some(row)
}
