use super::{
    CellOutcome, ExchangeToken, HardBoard, HardClick, Mode, Phase, ScheduledExchange, SelectError,
    Selection, Submission,
};
use crate::board::Board;
use crate::config::GameConfig;
use crate::core::{GRID_SIZE, ROWS, WORD_LEN, Word};
use crate::puzzle::Puzzle;
use crate::scoring::{LetterUsage, SubmitError, calculate_letter_usage, validate_submission};
use crate::wordlists::Dictionary;
use std::time::Instant;
use tracing::{debug, info, warn};

/// An accepted word and where it landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub word: Word,
    /// The row cells the word now occupies
    pub destination: [usize; WORD_LEN],
    /// Every cell is now captured
    pub is_complete: bool,
}

/// One player's game for one puzzle
///
/// Starts in [`Phase::Loading`]; [`GameSession::begin`] supplies the puzzle
/// and dictionary. Until then every mutating call is refused.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    game: Option<Game>,
}

#[derive(Debug, Clone)]
struct Game {
    puzzle: Puzzle,
    dictionary: Dictionary,
    board: Board,
    selection: Selection,
    submissions: Vec<Submission>,
    locked: [bool; GRID_SIZE],
    complete: bool,
    hard: Option<HardBoard>,
}

impl Game {
    fn new(puzzle: Puzzle, dictionary: Dictionary) -> Self {
        Self {
            board: Board::identity(puzzle.letters()),
            puzzle,
            dictionary,
            selection: Selection::default(),
            submissions: Vec::new(),
            locked: [false; GRID_SIZE],
            complete: false,
            hard: None,
        }
    }

    fn reset_progress(&mut self) {
        self.board = Board::identity(self.puzzle.letters());
        self.selection.clear();
        self.submissions.clear();
        self.locked = [false; GRID_SIZE];
        self.complete = false;
    }

    fn is_complete(&self) -> bool {
        self.hard
            .as_ref()
            .map_or(self.complete, HardBoard::is_complete)
    }
}

impl GameSession {
    /// A session waiting for its puzzle
    #[must_use]
    pub fn loading() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub const fn with_config(config: GameConfig) -> Self {
        Self { config, game: None }
    }

    /// Install the puzzle and dictionary, entering [`Phase::Ready`]
    ///
    /// Calling this again replaces the game and discards all progress.
    pub fn begin(&mut self, puzzle: Puzzle, dictionary: Dictionary) {
        if !puzzle.is_playable() {
            warn!(date = puzzle.id(), "starting session on a placeholder puzzle");
        }
        if dictionary.is_empty() {
            warn!(date = puzzle.id(), "starting session with an empty dictionary");
        }
        info!(
            date = puzzle.id(),
            dictionary = dictionary.len(),
            "session started"
        );
        self.game = Some(Game::new(puzzle, dictionary));
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.game {
            None => Phase::Loading,
            Some(game) if game.is_complete() => Phase::Complete,
            Some(_) => Phase::Ready,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        match &self.game {
            Some(Game { hard: Some(_), .. }) => Mode::Hard,
            _ => Mode::Standard,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.game.as_ref().map(|game| &game.puzzle)
    }

    #[must_use]
    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.game.as_ref().map(|game| &game.dictionary)
    }

    /// The standard-mode board
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.game.as_ref().map(|game| &game.board)
    }

    /// The hard-mode board, when hard mode is active
    #[must_use]
    pub fn hard_board(&self) -> Option<&HardBoard> {
        self.game.as_ref().and_then(|game| game.hard.as_ref())
    }

    /// Letters currently shown, whichever mode is active
    #[must_use]
    pub fn letters(&self) -> Option<&[u8; GRID_SIZE]> {
        let game = self.game.as_ref()?;
        Some(
            game.hard
                .as_ref()
                .map_or_else(|| game.board.letters(), HardBoard::letters),
        )
    }

    /// Highlighted cells in click order
    #[must_use]
    pub fn selected(&self) -> Vec<usize> {
        match &self.game {
            None => Vec::new(),
            Some(Game {
                hard: Some(hard), ..
            }) => hard.selected(),
            Some(game) => game.selection.indices().to_vec(),
        }
    }

    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        self.game
            .as_ref()
            .map(|game| game.submissions.as_slice())
            .unwrap_or_default()
    }

    /// Letters of the current selection, read through the live board
    #[must_use]
    pub fn current_input(&self) -> String {
        let Some(letters) = self.letters() else {
            return String::new();
        };
        self.selected()
            .iter()
            .map(|&i| char::from(letters[i]))
            .collect()
    }

    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| game.locked.get(index).copied().unwrap_or(false))
    }

    /// Cells captured by accepted words, ascending
    #[must_use]
    pub fn locked_indices(&self) -> Vec<usize> {
        (0..GRID_SIZE).filter(|&i| self.is_locked(i)).collect()
    }

    /// Letter accounting over the accepted words
    #[must_use]
    pub fn letter_usage(&self) -> Option<LetterUsage> {
        let game = self.game.as_ref()?;
        let words: Vec<&str> = game.submissions.iter().map(|s| s.word.text()).collect();
        Some(calculate_letter_usage(game.puzzle.letters(), &words))
    }

    /// Letters submitted in standard mode, exchanges in hard mode
    #[must_use]
    pub fn score(&self) -> usize {
        match &self.game {
            None => 0,
            Some(Game {
                hard: Some(hard), ..
            }) => hard.swap_count(),
            Some(game) => game.submissions.iter().map(|s| s.word.text().len()).sum(),
        }
    }

    /// Click a cell now
    ///
    /// # Errors
    /// See [`GameSession::select_cell_at`].
    pub fn select_cell(&mut self, index: usize) -> Result<CellOutcome, SelectError> {
        self.select_cell_at(index, Instant::now())
    }

    /// Click a cell at time `now`
    ///
    /// In standard mode the last selected cell toggles off; any other
    /// already-selected cell is left alone. In hard mode `now` dates the
    /// exchange a second click schedules.
    ///
    /// # Errors
    /// `NotPlayable` while loading or once complete, `OutOfRange` for an
    /// index past the grid, `Locked` for a captured cell, `SelectionFull`
    /// when five cells are already chosen.
    pub fn select_cell_at(
        &mut self,
        index: usize,
        now: Instant,
    ) -> Result<CellOutcome, SelectError> {
        let game = self.game.as_mut().ok_or(SelectError::NotPlayable)?;
        if game.is_complete() {
            return Err(SelectError::NotPlayable);
        }
        if index >= GRID_SIZE {
            return Err(SelectError::OutOfRange(index));
        }

        if let Some(hard) = game.hard.as_mut() {
            return Ok(match hard.select_cell(index, now) {
                HardClick::Anchored(_) => CellOutcome::Anchored,
                HardClick::Released => CellOutcome::Released,
                HardClick::Scheduled(exchange) => CellOutcome::ExchangeScheduled(exchange.token),
            });
        }

        if game.locked[index] {
            return Err(SelectError::Locked(index));
        }
        if game.selection.contains(index) {
            if game.selection.last() == Some(index) {
                game.selection.pop();
                return Ok(CellOutcome::Removed);
            }
            return Ok(CellOutcome::Unchanged);
        }
        if game.selection.is_full() {
            return Err(SelectError::SelectionFull);
        }
        game.selection.push(index);
        Ok(CellOutcome::Appended)
    }

    /// Empty the selection; in hard mode also drops the anchor and any
    /// pending exchange
    pub fn clear_selection(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.selection.clear();
            if let Some(hard) = game.hard.as_mut() {
                hard.clear_selection();
            }
        }
    }

    /// Drop the last selected cell
    pub fn backspace(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.selection.pop();
            if let Some(hard) = game.hard.as_mut() {
                hard.clear_selection();
            }
        }
    }

    /// Try to capture the selected word
    ///
    /// On success the word moves into the next free row and its cells are
    /// locked. The selection is left in place for the caller to clear.
    ///
    /// # Errors
    /// Returns the first failing check: `NotPlayable`, `TooShort`,
    /// `LockedCell`, `NotInDictionary`, `AlreadyUsed`, `BoardMismatch`.
    /// Nothing changes on error.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let game = self.game.as_mut().ok_or(SubmitError::NotPlayable)?;
        if game.hard.is_some() || game.is_complete() {
            return Err(SubmitError::NotPlayable);
        }

        let source = game.selection.as_word().ok_or(SubmitError::TooShort)?;
        if let Some(&index) = source.iter().find(|&&i| game.locked[i]) {
            return Err(SubmitError::LockedCell(index));
        }

        let letters = source.map(|i| game.board.letter_at(i));
        let word = Word::from_bytes(&letters).map_err(|_| SubmitError::TooShort)?;
        if !game.dictionary.contains_word(&word) {
            debug!(word = word.text(), "rejected: not in dictionary");
            return Err(SubmitError::NotInDictionary);
        }
        if game.submissions.iter().any(|s| s.word == word) {
            debug!(word = word.text(), "rejected: already used");
            return Err(SubmitError::AlreadyUsed);
        }
        validate_submission(word.text(), game.board.letters())?;

        let row = game.submissions.len();
        debug_assert!(row < ROWS);
        let outcome = game.board.commit(&source, row);
        game.board = outcome.board;
        for &i in &outcome.destination {
            game.locked[i] = true;
        }
        game.submissions.push(Submission {
            word: word.clone(),
            source_indices: outcome.destination,
        });
        game.complete = game.locked.iter().all(|&l| l);

        info!(
            word = word.text(),
            row,
            complete = game.complete,
            "word captured"
        );
        Ok(SubmitOutcome {
            word,
            destination: outcome.destination,
            is_complete: game.complete,
        })
    }

    /// Start the current mode over on the same puzzle
    pub fn reset(&mut self) {
        let delay = self.config.swap_delay;
        if let Some(game) = self.game.as_mut() {
            game.reset_progress();
            if game.hard.is_some() {
                game.hard = Some(HardBoard::new(
                    *game.puzzle.letters(),
                    delay,
                    &game.dictionary,
                ));
            }
            info!(date = game.puzzle.id(), "session reset");
        }
    }

    /// Switch between standard and hard mode, discarding progress in both
    ///
    /// Returns the new mode, or `None` while loading.
    pub fn toggle_mode(&mut self) -> Option<Mode> {
        let delay = self.config.swap_delay;
        let mode = self.mode().other();
        let game = self.game.as_mut()?;
        game.reset_progress();
        game.hard = match mode {
            Mode::Standard => None,
            Mode::Hard => Some(HardBoard::new(
                *game.puzzle.letters(),
                delay,
                &game.dictionary,
            )),
        };
        info!(%mode, "mode changed");
        Some(mode)
    }

    /// Apply a due hard-mode exchange
    pub fn tick(&mut self, now: Instant) -> Option<ScheduledExchange> {
        let game = self.game.as_mut()?;
        let applied = game.hard.as_mut()?.tick(now, &game.dictionary);
        if applied.is_some() && game.is_complete() {
            info!(swaps = self.score(), "hard mode solved");
        }
        applied
    }

    #[must_use]
    pub fn pending_exchange(&self) -> Option<&ScheduledExchange> {
        self.hard_board().and_then(HardBoard::pending)
    }

    /// Abort a pending hard-mode exchange
    pub fn cancel_pending(&mut self) -> Option<ScheduledExchange> {
        self.game.as_mut()?.hard.as_mut()?.cancel_pending()
    }

    /// Abort the exchange `token` was issued for, if it has not fired yet
    ///
    /// Returns `false` for a stale token; the board and counter are left
    /// alone in that case.
    pub fn cancel_exchange(&mut self, token: ExchangeToken) -> bool {
        self.game
            .as_mut()
            .and_then(|game| game.hard.as_mut())
            .is_some_and(|hard| hard.cancel(token))
    }

    /// Dictionary membership of each hard-mode row
    #[must_use]
    pub fn rows_valid(&self) -> Option<[bool; ROWS]> {
        let game = self.game.as_ref()?;
        game.hard
            .as_ref()
            .map(|hard| hard.rows_valid(&game.dictionary))
    }

    /// Replace standard-mode progress with an already validated board and
    /// submission list
    pub(crate) fn install(&mut self, board: Board, submissions: Vec<Submission>) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        game.reset_progress();
        game.hard = None;
        for submission in &submissions {
            for &i in &submission.source_indices {
                game.locked[i] = true;
            }
        }
        game.board = board;
        game.submissions = submissions;
        game.complete = game.locked.iter().all(|&l| l);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const LETTERS: &[u8; 25] = b"ABCDEFGHIJKLMNOPQRSTUVWXY";
    const ROW_WORDS: [&str; 5] = ["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY"];

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn session_with(letters: &[u8; 25], dictionary: &[&str]) -> GameSession {
        let mut session = GameSession::loading();
        session.begin(
            Puzzle::new("2024-03-01", *letters, words(&ROW_WORDS)),
            Dictionary::new(words(dictionary)),
        );
        session
    }

    fn session() -> GameSession {
        session_with(LETTERS, &ROW_WORDS)
    }

    fn select_all(session: &mut GameSession, cells: &[usize]) {
        for &cell in cells {
            session.select_cell(cell).unwrap();
        }
    }

    /// Cells currently holding `word`'s letters; letters must be distinct
    fn cells_for(session: &GameSession, word: &str) -> Vec<usize> {
        let letters = session.board().unwrap().letters();
        word.bytes()
            .map(|c| letters.iter().position(|&l| l == c).unwrap())
            .collect()
    }

    #[test]
    fn loading_refuses_everything() {
        let mut session = GameSession::loading();
        assert_eq!(session.phase(), Phase::Loading);
        assert_eq!(session.select_cell(0), Err(SelectError::NotPlayable));
        assert_eq!(session.submit(), Err(SubmitError::NotPlayable));
        assert_eq!(session.toggle_mode(), None);
        session.reset();
        session.clear_selection();
        assert!(session.board().is_none());
        assert!(session.current_input().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn begin_starts_ready_on_identity_board() {
        let session = session();
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.mode(), Mode::Standard);
        assert_eq!(session.board(), Some(&Board::identity(LETTERS)));
        assert!(session.submissions().is_empty());
    }

    #[test]
    fn only_last_selected_cell_toggles_off() {
        let mut session = session();
        select_all(&mut session, &[7, 3, 12]);

        assert_eq!(session.select_cell(3), Ok(CellOutcome::Unchanged));
        assert_eq!(session.selected(), vec![7, 3, 12]);
        assert_eq!(session.select_cell(12), Ok(CellOutcome::Removed));
        assert_eq!(session.selected(), vec![7, 3]);
        assert_eq!(session.current_input(), "HD");
    }

    #[test]
    fn full_selection_rejects_new_cells_but_allows_toggle() {
        let mut session = session();
        select_all(&mut session, &[0, 1, 2, 3, 4]);

        assert_eq!(session.select_cell(9), Err(SelectError::SelectionFull));
        assert_eq!(session.select_cell(25), Err(SelectError::OutOfRange(25)));
        assert_eq!(session.select_cell(4), Ok(CellOutcome::Removed));
        assert_eq!(session.select_cell(9), Ok(CellOutcome::Appended));
    }

    #[test]
    fn clear_and_backspace() {
        let mut session = session();
        select_all(&mut session, &[0, 1, 2]);
        session.backspace();
        assert_eq!(session.selected(), vec![0, 1]);
        session.clear_selection();
        assert!(session.selected().is_empty());
        session.backspace();
        assert!(session.selected().is_empty());
    }

    #[test]
    fn short_selection_is_too_short() {
        let mut session = session();
        select_all(&mut session, &[0, 1, 2, 3]);
        assert_eq!(session.submit(), Err(SubmitError::TooShort));
    }

    #[test]
    fn unknown_word_changes_nothing() {
        let mut session = session();
        select_all(&mut session, &[1, 0, 2, 3, 4]);
        assert_eq!(session.current_input(), "BACDE");

        assert_eq!(session.submit(), Err(SubmitError::NotInDictionary));
        assert_eq!(session.board(), Some(&Board::identity(LETTERS)));
        assert!(session.submissions().is_empty());
        assert!(session.locked_indices().is_empty());
    }

    #[test]
    fn accepted_word_moves_into_first_row_and_locks() {
        let mut session = session();
        select_all(&mut session, &[5, 6, 7, 8, 9]);

        let outcome = session.submit().unwrap();
        assert_eq!(outcome.word.text(), "FGHIJ");
        assert_eq!(outcome.destination, [0, 1, 2, 3, 4]);
        assert!(!outcome.is_complete);

        let board = session.board().unwrap();
        assert_eq!(board.row(0), "FGHIJ");
        assert_eq!(board.row(1), "ABCDE");
        assert_eq!(session.locked_indices(), vec![0, 1, 2, 3, 4]);
        // Selection is left for the caller
        assert_eq!(session.selected(), vec![5, 6, 7, 8, 9]);
        assert_eq!(session.current_input(), "ABCDE");

        session.clear_selection();
        assert_eq!(session.select_cell(2), Err(SelectError::Locked(2)));
    }

    #[test]
    fn stale_selection_over_captured_cells_is_refused() {
        let mut session = session();
        select_all(&mut session, &[4, 3, 2, 1, 0]);
        assert_eq!(session.submit(), Err(SubmitError::NotInDictionary));
        session.clear_selection();

        select_all(&mut session, &[0, 1, 2, 3, 4]);
        session.submit().unwrap();
        assert_eq!(session.submit(), Err(SubmitError::LockedCell(0)));
        assert_eq!(session.submissions().len(), 1);
    }

    #[test]
    fn same_word_twice_is_already_used() {
        let letters = b"ABCDEABCDEFGHIJFGHIJKLMNO";
        let mut session = session_with(letters, &["ABCDE", "FGHIJ", "KLMNO"]);

        select_all(&mut session, &[0, 1, 2, 3, 4]);
        session.submit().unwrap();
        session.clear_selection();

        select_all(&mut session, &[5, 6, 7, 8, 9]);
        assert_eq!(session.current_input(), "ABCDE");
        assert_eq!(session.submit(), Err(SubmitError::AlreadyUsed));
        assert_eq!(session.submissions().len(), 1);
    }

    #[test]
    fn index_and_letter_completion_agree() {
        let mut session = session();

        for word in ["PQRST", "ABCDE", "UVWXY", "FGHIJ", "KLMNO"] {
            let usage = session.letter_usage().unwrap();
            assert!(!usage.is_complete);
            assert_eq!(session.phase(), Phase::Ready);

            let cells = cells_for(&session, word);
            select_all(&mut session, &cells);
            let outcome = session.submit().unwrap();
            assert_eq!(outcome.word.text(), word);
            session.clear_selection();
        }

        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.locked_indices().len(), GRID_SIZE);
        let usage = session.letter_usage().unwrap();
        assert!(usage.is_complete);
        assert_eq!(usage.score, 25);
        assert_eq!(session.score(), 25);

        let board = session.board().unwrap();
        let rows: Vec<String> = (0..ROWS).map(|r| board.row(r)).collect();
        assert_eq!(rows, ["PQRST", "ABCDE", "UVWXY", "FGHIJ", "KLMNO"]);
        assert!(board.is_permutation());

        assert_eq!(session.select_cell(0), Err(SelectError::NotPlayable));
        assert_eq!(session.submit(), Err(SubmitError::NotPlayable));
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut session = session();
        select_all(&mut session, &[20, 21, 22, 23, 24]);
        session.submit().unwrap();

        session.reset();
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.board(), Some(&Board::identity(LETTERS)));
        assert!(session.submissions().is_empty());
        assert!(session.selected().is_empty());
        assert!(session.locked_indices().is_empty());
    }

    #[test]
    fn hard_mode_exchange_flow() {
        let mut session = session();
        select_all(&mut session, &[0, 1, 2, 3, 4]);
        session.submit().unwrap();

        assert_eq!(session.toggle_mode(), Some(Mode::Hard));
        assert!(session.submissions().is_empty());
        assert_eq!(session.score(), 0);

        let t0 = Instant::now();
        assert_eq!(session.select_cell_at(0, t0), Ok(CellOutcome::Anchored));
        assert!(matches!(
            session.select_cell_at(6, t0),
            Ok(CellOutcome::ExchangeScheduled(_))
        ));
        assert_eq!(session.selected(), vec![0, 6]);
        assert_eq!(session.current_input(), "AG");
        assert_eq!(session.submit(), Err(SubmitError::NotPlayable));

        assert!(session.tick(t0 + Duration::from_millis(100)).is_none());
        assert!(session.tick(t0 + session.config().swap_delay).is_some());
        let letters = session.letters().unwrap();
        assert_eq!((letters[0], letters[6]), (b'G', b'A'));
        assert_eq!(session.score(), 1);
        assert_eq!(
            session.rows_valid(),
            Some([false, false, true, true, true])
        );

        assert_eq!(session.toggle_mode(), Some(Mode::Standard));
        assert_eq!(session.score(), 0);
        assert_eq!(session.letters(), Some(LETTERS));
    }

    #[test]
    fn hard_mode_cancel_and_clear() {
        let mut session = session();
        session.toggle_mode();
        let now = Instant::now();

        session.select_cell_at(3, now).unwrap();
        session.select_cell_at(4, now).unwrap();
        assert!(session.pending_exchange().is_some());
        assert!(session.cancel_pending().is_some());
        assert_eq!(session.score(), 0);
        assert!(session.tick(now + Duration::from_secs(5)).is_none());

        session.select_cell_at(3, now).unwrap();
        session.clear_selection();
        assert!(session.selected().is_empty());
    }

    #[test]
    fn exchange_token_cancels_only_its_own_exchange() {
        let mut session = session();
        session.toggle_mode();
        let now = Instant::now();

        session.select_cell_at(0, now).unwrap();
        let Ok(CellOutcome::ExchangeScheduled(first)) = session.select_cell_at(1, now) else {
            panic!("second click should schedule an exchange");
        };
        // A third click replaces the pending exchange with a new anchor
        assert_eq!(session.select_cell_at(2, now), Ok(CellOutcome::Anchored));
        let Ok(CellOutcome::ExchangeScheduled(second)) = session.select_cell_at(3, now) else {
            panic!("second click should schedule an exchange");
        };
        assert_ne!(first, second);
        assert_eq!(session.score(), 1);

        assert!(!session.cancel_exchange(first));
        assert_eq!(session.score(), 1);
        assert!(session.pending_exchange().is_some());

        assert!(session.cancel_exchange(second));
        assert_eq!(session.score(), 0);
        assert!(session.pending_exchange().is_none());
        assert!(!session.cancel_exchange(second));
        assert!(session.tick(now + Duration::from_secs(5)).is_none());
        assert_eq!(session.letters(), Some(LETTERS));
    }

    #[test]
    fn stale_token_after_exchange_fires_is_ignored() {
        let mut session = session();
        session.toggle_mode();
        let now = Instant::now();

        session.select_cell_at(0, now).unwrap();
        let Ok(CellOutcome::ExchangeScheduled(token)) = session.select_cell_at(1, now) else {
            panic!("second click should schedule an exchange");
        };
        assert!(session.tick(now + session.config().swap_delay).is_some());

        assert!(!session.cancel_exchange(token));
        assert_eq!(session.score(), 1);
        assert_eq!(&session.letters().unwrap()[..2], b"BA");
    }

    #[test]
    fn standard_mode_has_no_exchange_to_cancel() {
        let mut session = session();
        assert!(session.cancel_pending().is_none());
        session.toggle_mode();
        session.select_cell_at(0, Instant::now()).unwrap();
        let Ok(CellOutcome::ExchangeScheduled(token)) = session.select_cell_at(1, Instant::now())
        else {
            panic!("second click should schedule an exchange");
        };
        session.toggle_mode();
        assert!(!session.cancel_exchange(token));
    }

    #[test]
    fn hard_mode_completes_when_every_row_is_a_word() {
        let mut session = session_with(b"BACDEFGHIJKLMNOPQRSTUVWXY", &ROW_WORDS);
        session.toggle_mode();
        assert_eq!(session.phase(), Phase::Ready);

        let now = Instant::now();
        session.select_cell_at(0, now).unwrap();
        session.select_cell_at(1, now).unwrap();
        session.tick(now + Duration::from_secs(1));

        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.score(), 1);
        assert_eq!(session.select_cell_at(5, now), Err(SelectError::NotPlayable));

        session.reset();
        assert_eq!(session.mode(), Mode::Hard);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.score(), 0);
    }
}
