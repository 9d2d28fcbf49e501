//! Display functions for command results

use super::formatters::{
    capture_summary, cell_label, create_progress_bar, row_label, score_label, spaced,
};
use crate::commands::{PuzzleReport, SurveyStatistics};
use crate::core::{GRID_SIZE, ROWS, WORD_LEN};
use crate::scoring::SubmitError;
use crate::session::{GameSession, Mode, SubmitOutcome};
use colored::Colorize;

/// Print the live grid with captured and selected cells highlighted
///
/// Each cell shows its one-based number next to its letter so the
/// line-oriented front end can refer to it.
pub fn print_board(session: &GameSession) {
    let Some(letters) = session.letters() else {
        println!("{}", "Loading...".dimmed());
        return;
    };

    let selected = session.selected();
    let valid_rows = session.rows_valid();

    println!();
    for row in 0..ROWS {
        let mut line = format!(" {} ", row_label(row * WORD_LEN).to_string().dimmed());
        for col in 0..WORD_LEN {
            let index = row * WORD_LEN + col;
            let letter = format!(" {} ", char::from(letters[index]));
            let styled = if selected.contains(&index) {
                letter.black().on_yellow().bold()
            } else if session.is_locked(index) {
                letter.black().on_green()
            } else if valid_rows.is_some_and(|rows| rows[row]) {
                letter.green().bold()
            } else {
                letter.white()
            };
            line.push_str(&format!("{}{} ", cell_label(index).dimmed(), styled));
        }
        println!("{line}");
    }
    println!();

    let status = score_label(session.mode(), session.score());
    match session.mode() {
        Mode::Standard => {
            if let Some(usage) = session.letter_usage() {
                let captured = usage.captured_counts.total();
                println!(
                    "  [{}] {captured}/{GRID_SIZE} captured | {status}",
                    create_progress_bar(captured as f64, GRID_SIZE as f64, 25).cyan()
                );
                println!(
                    "  {}",
                    capture_summary(&usage.puzzle_counts, &usage.captured_counts).dimmed()
                );
            }
            let input = session.current_input();
            if !input.is_empty() {
                println!("  Selected: {}", input.bright_yellow().bold());
            }
        }
        Mode::Hard => {
            let solved = valid_rows.map_or(0, |rows| rows.iter().filter(|&&ok| ok).count());
            println!("  {solved}/{ROWS} rows are words | {status}");
            if let Some(pending) = session.pending_exchange() {
                println!(
                    "  Swapping cells {} and {}",
                    pending.a + 1,
                    pending.b + 1
                );
            }
        }
    }
}

/// Print an accepted word
pub fn print_accepted(outcome: &SubmitOutcome) {
    println!(
        "{} {} captured into row {}",
        "✓".green().bold(),
        outcome.word.text().bright_green().bold(),
        row_label(outcome.destination[0])
    );
}

/// Print why a word was refused
pub fn print_rejected(error: &SubmitError) {
    let text = error.to_string();
    let styled = match error {
        SubmitError::AlreadyUsed => text.yellow().bold(),
        _ => text.red().bold(),
    };
    println!("{} {styled}", "✗".red().bold());
}

/// Print the completion summary: score, history, next step
pub fn print_completion(session: &GameSession) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "SOLVED".bright_green().bold(),
        session.puzzle().map_or("", |p| p.id()).bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "Score: {}",
        score_label(session.mode(), session.score()).bold()
    );

    match session.mode() {
        Mode::Standard => {
            println!("\nWords:");
            for (i, submission) in session.submissions().iter().enumerate() {
                println!("  {}. {}", i + 1, submission.word.text().green());
            }
            println!(
                "\n{}",
                "Ready for more? Type 'hard' to rebuild the rows by swapping letters.".cyan()
            );
        }
        Mode::Hard => {
            println!(
                "\n{}",
                "Every row is a word. Type 'reset' to play again.".cyan()
            );
        }
    }
}

/// Print the puzzle for one date
pub fn print_puzzle_report(report: &PuzzleReport, reveal: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE:".bright_cyan().bold(),
        report.puzzle.id().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !report.puzzle.is_playable() {
        println!(
            "{}",
            "⚠ Too few common words; showing the placeholder grid".yellow()
        );
    }

    println!();
    for row in report.puzzle.letters().chunks(WORD_LEN) {
        println!("   {}", spaced(row).bold());
    }
    println!();

    println!(
        "Distinct letters: {}   Most repeated: {}",
        report.counts.distinct(),
        report.counts.max_multiplicity()
    );
    let repeated = report.repeated_letters();
    if !repeated.is_empty() {
        let list: Vec<String> = repeated.iter().map(|(c, n)| format!("{c}×{n}")).collect();
        println!("Repeats:          {}", list.join(" "));
    }
    println!(
        "Word list:        {} words ({} common)",
        report.dictionary_size, report.common_size
    );

    if reveal {
        println!("\nSeed words:");
        for word in report.puzzle.seed_words() {
            println!("  {}", word.text().bright_green());
        }
    }
}

/// Print aggregate statistics for a survey run
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "SURVEY STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = stats.total();
    if total == 0 {
        println!("No dates in range.");
        return;
    }

    let playable = stats.playable();
    println!(
        "Puzzles:        {total} ({playable} playable, {:.1}%)",
        playable as f64 / total as f64 * 100.0
    );
    println!("Repeated seeds: {}", stats.repeated_seed());
    println!("Avg distinct:   {:.2} letters", stats.average_distinct());
    println!(
        "Vowel share:    [{}] {:.1}%",
        create_progress_bar(stats.vowel_share(), 1.0, 20).cyan(),
        stats.vowel_share() * 100.0
    );

    if let Some(p) = stats.most_repetitive() {
        println!(
            "Most repeated:  {} ({} copies of one letter)",
            p.date.bright_yellow(),
            p.max_multiplicity
        );
    }
    if let Some(p) = stats.least_varied() {
        println!(
            "Least varied:   {} ({} distinct letters)",
            p.date.bright_yellow(),
            p.distinct_letters
        );
    }

    println!("\nLetter frequency across all grids:");
    let max = stats
        .letter_totals
        .iter()
        .map(|(_, n)| n)
        .max()
        .unwrap_or(1);
    for (letter, count) in stats.letter_totals.iter() {
        println!(
            "  {letter} {} {count}",
            create_progress_bar(count as f64, max as f64, 30).green()
        );
    }

    println!(
        "\nTotal time: {:.2}s ({:.2}ms per puzzle)",
        stats.total_time.as_secs_f64(),
        stats.total_time.as_secs_f64() * 1000.0 / total as f64
    );
}
