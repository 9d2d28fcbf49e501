//! Survey a run of daily puzzles
//!
//! Generates the puzzle for every date in a range and summarizes what the
//! grids look like. Useful for checking a new word list before shipping it.

use crate::core::{GRID_SIZE, LetterCounts, Word};
use crate::puzzle::{date_id, generate_puzzle};
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

const VOWELS: &[u8] = b"AEIOU";

/// Range of dates to survey
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    pub start: NaiveDate,
    pub days: u64,
    pub show_progress: bool,
}

impl SurveyConfig {
    #[must_use]
    pub const fn new(start: NaiveDate, days: u64) -> Self {
        Self {
            start,
            days,
            show_progress: true,
        }
    }
}

/// Shape of one generated grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleStats {
    pub date: String,
    pub playable: bool,
    pub distinct_letters: usize,
    pub max_multiplicity: usize,
    pub vowels: usize,
    /// The same seed word was drawn more than once
    pub repeated_seed: bool,
    pub letters: [u8; GRID_SIZE],
}

impl PuzzleStats {
    fn measure(date: String, common: &[Word]) -> Self {
        let puzzle = generate_puzzle(&date, common);
        let counts = puzzle.letter_counts();
        let seeds = puzzle.seed_words();
        let repeated_seed = seeds
            .iter()
            .enumerate()
            .any(|(i, word)| seeds[..i].contains(word));

        Self {
            playable: puzzle.is_playable(),
            distinct_letters: counts.distinct(),
            max_multiplicity: counts.max_multiplicity(),
            vowels: VOWELS.iter().map(|&v| counts.get(v)).sum(),
            repeated_seed,
            letters: *puzzle.letters(),
            date,
        }
    }
}

/// Aggregate over all surveyed dates
#[derive(Debug)]
pub struct SurveyStatistics {
    pub puzzles: Vec<PuzzleStats>,
    pub letter_totals: LetterCounts,
    pub total_time: Duration,
}

impl SurveyStatistics {
    #[must_use]
    pub fn total(&self) -> usize {
        self.puzzles.len()
    }

    #[must_use]
    pub fn playable(&self) -> usize {
        self.puzzles.iter().filter(|p| p.playable).count()
    }

    #[must_use]
    pub fn repeated_seed(&self) -> usize {
        self.puzzles.iter().filter(|p| p.repeated_seed).count()
    }

    #[must_use]
    pub fn average_distinct(&self) -> f64 {
        self.average(|p| p.distinct_letters)
    }

    /// Share of grid cells holding a vowel
    #[must_use]
    pub fn vowel_share(&self) -> f64 {
        self.average(|p| p.vowels) / GRID_SIZE as f64
    }

    /// Puzzle with the most copies of a single letter
    #[must_use]
    pub fn most_repetitive(&self) -> Option<&PuzzleStats> {
        self.puzzles.iter().max_by_key(|p| p.max_multiplicity)
    }

    /// Puzzle with the fewest distinct letters
    #[must_use]
    pub fn least_varied(&self) -> Option<&PuzzleStats> {
        self.puzzles.iter().min_by_key(|p| p.distinct_letters)
    }

    fn average(&self, field: impl Fn(&PuzzleStats) -> usize) -> f64 {
        if self.puzzles.is_empty() {
            return 0.0;
        }
        self.puzzles.iter().map(field).sum::<usize>() as f64 / self.puzzles.len() as f64
    }
}

/// Generate and measure every puzzle in the configured range
///
/// Dates past the end of the calendar are skipped.
#[must_use]
pub fn run_survey(common: &[Word], config: &SurveyConfig) -> SurveyStatistics {
    let dates: Vec<String> = (0..config.days)
        .filter_map(|offset| config.start.checked_add_days(Days::new(offset)))
        .map(date_id)
        .collect();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(dates.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message("generating");

    let start = Instant::now();
    let puzzles: Vec<PuzzleStats> = dates
        .into_par_iter()
        .map(|date| {
            let stats = PuzzleStats::measure(date, common);
            pb.inc(1);
            stats
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut letter_totals = LetterCounts::default();
    for &letter in puzzles.iter().flat_map(|p| &p.letters) {
        letter_totals.add(letter);
    }

    SurveyStatistics {
        puzzles,
        letter_totals,
        total_time: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordSource;

    fn quiet(start: NaiveDate, days: u64) -> SurveyConfig {
        SurveyConfig {
            show_progress: false,
            ..SurveyConfig::new(start, days)
        }
    }

    #[test]
    fn survey_covers_each_date_in_order() {
        let source = WordSource::embedded();
        let start = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let stats = run_survey(source.common(), &quiet(start, 5));

        let dates: Vec<&str> = stats.puzzles.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(
            dates,
            ["2024-12-30", "2024-12-31", "2025-01-01", "2025-01-02", "2025-01-03"]
        );
        assert_eq!(stats.total(), 5);
        assert_eq!(stats.playable(), 5);
        assert_eq!(stats.letter_totals.total(), 125);
    }

    #[test]
    fn survey_matches_single_generation() {
        let source = WordSource::embedded();
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let stats = run_survey(source.common(), &quiet(start, 3));

        let leap = &stats.puzzles[1];
        assert_eq!(leap.date, "2024-02-29");
        let puzzle = generate_puzzle("2024-02-29", source.common());
        assert_eq!(leap.distinct_letters, puzzle.letter_counts().distinct());
        assert!(leap.max_multiplicity >= 1);
        assert!((0.0..=1.0).contains(&stats.vowel_share()));
    }

    #[test]
    fn tiny_word_list_is_unplayable() {
        let common: Vec<Word> = ["CRANE", "SLATE"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let stats = run_survey(&common, &quiet(start, 2));

        assert_eq!(stats.playable(), 0);
        assert_eq!(stats.least_varied().map(|p| p.distinct_letters), Some(1));
        assert_eq!(stats.most_repetitive().map(|p| p.max_multiplicity), Some(25));
    }

    #[test]
    fn empty_range() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let stats = run_survey(&[], &quiet(start, 0));
        assert_eq!(stats.total(), 0);
        assert!(stats.average_distinct().abs() < f64::EPSILON);
        assert!(stats.most_repetitive().is_none());
    }
}
