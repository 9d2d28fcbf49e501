//! TUI application state and logic

use crate::core::{GRID_SIZE, ROWS, WORD_LEN};
use crate::persistence::SnapshotStore;
use crate::scoring::SubmitError;
use crate::session::{CellOutcome, GameSession, Mode, Phase, SelectError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::warn;

/// How long the event loop waits for a key before ticking
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub const SUCCESS_FEEDBACK: Duration = Duration::from_secs(2);
pub const WARNING_FEEDBACK: Duration = Duration::from_secs(2);
pub const ERROR_FEEDBACK: Duration = Duration::from_secs(1);

/// Application state
pub struct App {
    pub session: GameSession,
    pub store: Option<SnapshotStore>,
    pub cursor: usize,
    pub input_mode: InputMode,
    pub feedback: Option<Feedback>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// Today's game is finished; only mode switch, reset and quit apply
    Celebration,
}

/// Flash shown under the grid after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub style: MessageStyle,
    pub expires: Instant,
    /// Clear the selection when the flash expires
    pub clears_selection: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: GameSession, store: Option<SnapshotStore>) -> Self {
        let mut app = Self {
            session,
            store,
            cursor: 0,
            input_mode: InputMode::Playing,
            feedback: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Build five words from the grid. Fewer letters is better.",
            MessageStyle::Info,
        );
        app.sync_input_mode();
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    pub fn move_cursor(&mut self, rows: isize, cols: isize) {
        let row = (self.cursor / WORD_LEN) as isize;
        let col = (self.cursor % WORD_LEN) as isize;
        let row = (row + rows).rem_euclid(ROWS as isize) as usize;
        let col = (col + cols).rem_euclid(WORD_LEN as isize) as usize;
        self.cursor = row * WORD_LEN + col;
    }

    /// Select the cell under the cursor
    pub fn select_at_cursor(&mut self, now: Instant) {
        // A click during a flash starts a fresh selection
        if self.feedback.take().is_some_and(|f| f.clears_selection) {
            self.session.clear_selection();
        }

        match self.session.select_cell_at(self.cursor, now) {
            Ok(CellOutcome::Appended) if self.session.selected().len() == WORD_LEN => {
                self.submit(now);
            }
            Ok(_) => {}
            Err(SelectError::Locked(_)) => {
                self.flash("Already captured", MessageStyle::Warning, now, ERROR_FEEDBACK, false);
            }
            Err(SelectError::SelectionFull) => {
                self.flash("Five letters max", MessageStyle::Warning, now, ERROR_FEEDBACK, false);
            }
            Err(e) => warn!(error = %e, "selection refused"),
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.session.submit() {
            Ok(outcome) => {
                self.session.clear_selection();
                let text = format!("Captured {}", outcome.word);
                self.flash(&text, MessageStyle::Success, now, SUCCESS_FEEDBACK, false);
                self.add_message(&text, MessageStyle::Success);
                self.persist();
                if outcome.is_complete {
                    self.add_message(
                        &format!("Solved with {} letters!", self.session.score()),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'h' to try hard mode.", MessageStyle::Info);
                }
            }
            Err(e @ SubmitError::AlreadyUsed) => {
                self.flash(&e.to_string(), MessageStyle::Warning, now, WARNING_FEEDBACK, true);
            }
            Err(e) => {
                self.flash(&e.to_string(), MessageStyle::Error, now, ERROR_FEEDBACK, true);
            }
        }
        self.sync_input_mode();
    }

    fn flash(
        &mut self,
        text: &str,
        style: MessageStyle,
        now: Instant,
        duration: Duration,
        clears_selection: bool,
    ) {
        self.feedback = Some(Feedback {
            text: text.to_string(),
            style,
            expires: now + duration,
            clears_selection,
        });
    }

    pub fn backspace(&mut self) {
        self.feedback = None;
        self.session.backspace();
    }

    pub fn clear_selection(&mut self) {
        self.feedback = None;
        self.session.clear_selection();
    }

    pub fn toggle_mode(&mut self) {
        self.feedback = None;
        if let Some(mode) = self.session.toggle_mode() {
            let text = match mode {
                Mode::Standard => "Standard mode: capture five words.",
                Mode::Hard => "Hard mode: swap cells until every row is a word.",
            };
            self.add_message(text, MessageStyle::Info);
            self.persist();
        }
        self.sync_input_mode();
    }

    pub fn reset(&mut self) {
        self.feedback = None;
        self.session.reset();
        self.add_message("Board reset.", MessageStyle::Info);
        self.persist();
        self.sync_input_mode();
    }

    /// Expire feedback and apply due hard-mode exchanges
    pub fn tick(&mut self, now: Instant) {
        if let Some(feedback) = &self.feedback
            && feedback.expires <= now
        {
            if feedback.clears_selection {
                self.session.clear_selection();
            }
            self.feedback = None;
        }

        if self.session.tick(now).is_some() && self.session.is_complete() {
            self.add_message(
                &format!("Solved with {} swaps!", self.session.score()),
                MessageStyle::Success,
            );
            self.sync_input_mode();
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('h') => self.toggle_mode(),
            KeyCode::Char('r') => self.reset(),
            _ if self.input_mode == InputMode::Celebration => {}
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => self.select_at_cursor(now),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Esc => self.clear_selection(),
            _ => {}
        }
    }

    fn sync_input_mode(&mut self) {
        self.input_mode = if self.session.phase() == Phase::Complete {
            InputMode::Celebration
        } else {
            InputMode::Playing
        };
    }

    fn persist(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save_session(&self.session) {
            warn!(error = %e, "could not save session");
            self.add_message("Progress could not be saved", MessageStyle::Error);
        }
    }

    /// Cell is inside the grid and captured
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        index < GRID_SIZE && self.session.is_locked(index)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code, key.modifiers, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
