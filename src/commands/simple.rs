//! Simple interactive CLI mode
//!
//! Line-oriented front end without the TUI. Cells are typed by number.

use crate::core::{GRID_SIZE, WORD_LEN};
use crate::output::{print_accepted, print_board, print_completion, print_rejected};
use crate::persistence::SnapshotStore;
use crate::session::{CellOutcome, GameSession, Mode, Phase};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::warn;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cells, in the order typed
    Cells(Vec<usize>),
    Submit,
    Back,
    Clear,
    Reset,
    ToggleMode,
    Show,
    Help,
    Quit,
}

/// Parse a line of input
///
/// Cell numbers are one-based (`1`..`25`) and may be separated by spaces or
/// commas. Returns `None` for anything unrecognized.
///
/// # Examples
/// ```
/// use par_puzzle::commands::simple::{Command, parse_command};
///
/// assert_eq!(parse_command("1 2,3"), Some(Command::Cells(vec![0, 1, 2])));
/// assert_eq!(parse_command("quit"), Some(Command::Quit));
/// assert_eq!(parse_command("26"), None);
/// ```
#[must_use]
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim().to_lowercase();
    let command = match input.as_str() {
        "" | "show" | "s" => Command::Show,
        "submit" | "enter" => Command::Submit,
        "back" | "b" | "undo" => Command::Back,
        "clear" | "c" => Command::Clear,
        "reset" | "r" | "new" => Command::Reset,
        "hard" | "standard" | "mode" | "h" => Command::ToggleMode,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => {
            let cells = input
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| match token.parse::<usize>() {
                    Ok(n @ 1..=GRID_SIZE) => Some(n - 1),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()?;
            Command::Cells(cells)
        }
    };
    Some(command)
}

/// Run the simple interactive CLI mode
///
/// Reads commands from `input` until `quit` or end of input. Progress is
/// saved to `store` after every accepted word, reset and mode change.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<R: BufRead>(
    session: &mut GameSession,
    store: Option<&SnapshotStore>,
    input: R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Par - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    if session.phase() == Phase::Loading {
        println!("{}", "No puzzle loaded.".red());
        return Ok(());
    }
    print_board(session);

    let mut lines = input.lines();
    loop {
        print!("{} ", ">".cyan().bold());
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("Failed to read input")?;

        let Some(command) = parse_command(&line) else {
            println!(
                "{} Type cell numbers 1-{GRID_SIZE}, or 'help'",
                "✗".red().bold()
            );
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                print_help();
                continue;
            }
            Command::Show => {}
            Command::Cells(cells) => select_cells(session, store, &cells),
            Command::Submit => submit(session, store),
            Command::Back => session.backspace(),
            Command::Clear => session.clear_selection(),
            Command::Reset => {
                session.reset();
                println!("Board reset.");
                persist(session, store);
            }
            Command::ToggleMode => {
                if let Some(mode) = session.toggle_mode() {
                    println!("Switched to {} mode.", mode.to_string().bold());
                    persist(session, store);
                }
            }
        }

        print_board(session);
        if session.is_complete() {
            print_completion(session);
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn select_cells(session: &mut GameSession, store: Option<&SnapshotStore>, cells: &[usize]) {
    for &index in cells {
        match session.select_cell(index) {
            Ok(CellOutcome::Appended)
                if session.mode() == Mode::Standard && session.selected().len() == WORD_LEN =>
            {
                submit(session, store);
                return;
            }
            Ok(CellOutcome::ExchangeScheduled(_)) => {
                if let Some(exchange) = session.tick(Instant::now()) {
                    println!("Swapped cells {} and {}", exchange.a + 1, exchange.b + 1);
                }
            }
            Ok(_) => {}
            Err(e) => {
                println!("{} {e}", "✗".red().bold());
                return;
            }
        }
    }
}

fn submit(session: &mut GameSession, store: Option<&SnapshotStore>) {
    let result = session.submit();
    session.clear_selection();
    match result {
        Ok(outcome) => {
            print_accepted(&outcome);
            persist(session, store);
        }
        Err(e) => print_rejected(&e),
    }
}

fn persist(session: &GameSession, store: Option<&SnapshotStore>) {
    if let Some(store) = store
        && let Err(e) = store.save_session(session)
    {
        warn!(error = %e, "could not save session");
        println!("{}", "Progress could not be saved".red());
    }
}

fn print_help() {
    println!("Pick cells by number (1-{GRID_SIZE}, left to right, top to bottom).");
    println!("Five cells spelling a word are captured into the next row.\n");
    println!("  3 7 12 ...  select cells (a fifth cell submits)");
    println!("  back        drop the last selected cell");
    println!("  clear       drop the whole selection");
    println!("  submit      submit the current selection");
    println!("  hard        switch between standard and hard mode");
    println!("  reset       start the board over");
    println!("  quit        leave\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::puzzle::Puzzle;
    use crate::wordlists::WordSource;

    fn session() -> GameSession {
        let source = WordSource::from_lines(["CRANE", "SLATE", "PRICK", "MOUND", "FLING"]);
        let letters: [u8; GRID_SIZE] = *b"RCANESLATEPRICKMOUNDFLING";
        let mut session = GameSession::with_config(GameConfig::immediate());
        session.begin(Puzzle::new("2024-01-01", letters, Vec::new()), source.into_parts().0);
        session
    }

    #[test]
    fn parse_words_and_cells() {
        assert_eq!(parse_command("  BACK "), Some(Command::Back));
        assert_eq!(parse_command(""), Some(Command::Show));
        assert_eq!(parse_command("hard"), Some(Command::ToggleMode));
        assert_eq!(parse_command("25"), Some(Command::Cells(vec![24])));
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("1 x"), None);
        assert_eq!(parse_command("florp"), None);
    }

    #[test]
    fn script_captures_a_word() {
        let mut session = session();
        run_simple(&mut session, None, "6 7 8 9 10\nquit\n".as_bytes()).unwrap();

        assert_eq!(session.submissions().len(), 1);
        assert_eq!(session.submissions()[0].word.text(), "SLATE");
        assert!(session.selected().is_empty());
        assert_eq!(session.locked_indices(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn rejected_word_clears_selection() {
        let mut session = session();
        run_simple(&mut session, None, "1 2 3 4 6\n".as_bytes()).unwrap();

        assert!(session.submissions().is_empty());
        assert!(session.selected().is_empty());
    }

    #[test]
    fn hard_mode_swaps_apply_immediately() {
        let mut session = session();
        run_simple(&mut session, None, "hard\n1 2\n".as_bytes()).unwrap();

        assert_eq!(session.mode(), Mode::Hard);
        assert_eq!(session.score(), 1);
        assert_eq!(&session.letters().unwrap()[..5], b"CRANE");
        assert!(session.is_complete());
    }
}
