//! Par - CLI
//!
//! Daily word-capture puzzle with TUI and line-oriented front ends.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use par_puzzle::{
    commands::{SurveyConfig, describe_puzzle, run_simple, run_survey},
    config::GameConfig,
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::{print_puzzle_report, print_survey_statistics},
    persistence::{DEFAULT_STATE_FILE, RestoreOutcome, SnapshotStore},
    puzzle::{date_id, generate_puzzle, today_id},
    session::GameSession,
    wordlists::{COMMON_FRACTION, WordSource, load_from_file},
};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "par",
    about = "Daily 5x5 word-capture puzzle: spell five words from 25 letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle date as YYYY-MM-DD (default: today)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Wordlist: 'embedded' (default) or path to a ranked list, one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Share of the ranked word list the daily puzzle draws from
    #[arg(long, global = true, default_value_t = COMMON_FRACTION)]
    common_fraction: f64,

    /// File holding saved progress
    #[arg(long, global = true, default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,

    /// Neither load nor save progress
    #[arg(long, global = true)]
    no_save: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type cell numbers, no TUI)
    Simple,

    /// Print the puzzle for a date
    Puzzle {
        /// Also show the five seed words
        #[arg(short, long)]
        reveal: bool,
    },

    /// Generate puzzles for a run of dates and report grid statistics
    Survey {
        /// Number of consecutive dates
        #[arg(short = 'n', long, default_value = "365")]
        days: u64,

        /// First date (default: --date or today)
        #[arg(short, long)]
        start: Option<NaiveDate>,
    },
}

/// Load the word source based on the -w flag
fn load_words(wordlist: &str, config: &GameConfig) -> Result<WordSource> {
    let fraction = config.common_fraction;
    match wordlist {
        "embedded" => Ok(WordSource::embedded_with_fraction(fraction)),
        path => load_from_file(path, fraction)
            .with_context(|| format!("Failed to read wordlist {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::Play) => LogTarget::Discard,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(cli.verbose, target)?;

    // The line-oriented front end has no clock, so exchanges apply at once
    let base = match command {
        Commands::Simple => GameConfig::immediate(),
        _ => GameConfig::default(),
    };
    let config = GameConfig {
        common_fraction: cli.common_fraction,
        ..base
    };

    let source = load_words(&cli.wordlist, &config)?;
    let date = cli.date.map_or_else(today_id, date_id);

    match command {
        Commands::Play => {
            let (session, store) = start_session(&cli, config, source, &date)?;
            run_tui(App::new(session, store))
        }
        Commands::Simple => {
            let (mut session, store) = start_session(&cli, config, source, &date)?;
            run_simple(&mut session, store.as_ref(), io::stdin().lock())
        }
        Commands::Puzzle { reveal } => {
            print_puzzle_report(&describe_puzzle(&date, &source), reveal);
            Ok(())
        }
        Commands::Survey { days, start } => {
            let start = start
                .or(cli.date)
                .unwrap_or_else(|| Local::now().date_naive());
            let stats = run_survey(source.common(), &SurveyConfig::new(start, days));
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

/// Build the session for `date` and bring back saved progress
fn start_session(
    cli: &Cli,
    config: GameConfig,
    source: WordSource,
    date: &str,
) -> Result<(GameSession, Option<SnapshotStore>)> {
    let store = (!cli.no_save).then(|| SnapshotStore::new(&cli.state));
    let (dictionary, common) = source.into_parts();

    let mut session = GameSession::with_config(config);
    session.begin(generate_puzzle(date, &common), dictionary);

    if let Some(store) = &store
        && let Some(snapshot) = store.load()?
    {
        match session.restore(&snapshot) {
            RestoreOutcome::Restored { submissions } | RestoreOutcome::FreshBoard { submissions } => {
                info!(submissions, "resumed saved progress");
            }
            RestoreOutcome::Discarded(_) => store.save_session(&session)?,
        }
    }

    Ok((session, store))
}
