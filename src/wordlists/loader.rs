//! Word list loading utilities
//!
//! Turns a frequency-ranked line source into the accepted-word set and the
//! common subset the puzzle generator samples from.

use super::DICTIONARY;
use crate::core::{ALPHABET, Word};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Share of the ranked list (from the top) that counts as common
pub const COMMON_FRACTION: f64 = 0.25;

/// The full set of accepted words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Check membership, ignoring case
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.words.contains(&word))
    }

    /// Check membership of an already-built word
    #[inline]
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Accepted words plus the ranked common subset
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    dictionary: Dictionary,
    common: Vec<Word>,
}

impl WordSource {
    /// Build from ranked lines (most frequent first) using [`COMMON_FRACTION`]
    ///
    /// # Examples
    /// ```
    /// use par_puzzle::wordlists::WordSource;
    ///
    /// let source = WordSource::from_lines(["crane", "slate\t812", "toolong", "irate"]);
    /// assert_eq!(source.dictionary().len(), 3);
    /// assert!(source.dictionary().contains("SLATE"));
    /// assert_eq!(source.common()[0].text(), "CRANE");
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_common_fraction(lines, COMMON_FRACTION)
    }

    /// Build from ranked lines with an explicit common-word share
    ///
    /// Only the first tab-separated field of each line is read, so raw
    /// frequency dumps (`word<TAB>count`) load directly. Tokens that are not
    /// exactly five letters are dropped. After taking the top share, every
    /// letter A–Z missing from it is backfilled with the highest-ranked
    /// remaining word that contains it.
    pub fn with_common_fraction<I, S>(lines: I, fraction: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let ranked: Vec<Word> = lines
            .into_iter()
            .filter_map(|line| {
                let token = line.as_ref().trim().split('\t').next()?.trim();
                Word::new(token).ok()
            })
            .filter(|word| seen.insert(word.clone()))
            .collect();

        let cutoff = ((ranked.len() as f64) * fraction.clamp(0.0, 1.0)).ceil() as usize;
        let cutoff = cutoff.min(ranked.len());
        let (top, remainder) = ranked.split_at(cutoff);
        let mut common = top.to_vec();

        for &letter in ALPHABET {
            if common.iter().any(|w| w.has_letter(letter)) {
                continue;
            }
            if let Some(found) = remainder.iter().find(|w| w.has_letter(letter)) {
                debug!(
                    letter = %char::from(letter),
                    word = %found,
                    "backfilled common words"
                );
                common.push(found.clone());
            }
        }

        debug!(
            total = ranked.len(),
            common = common.len(),
            "word source ready"
        );

        Self {
            dictionary: Dictionary::new(ranked),
            common,
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::embedded_with_fraction(COMMON_FRACTION)
    }

    /// The compiled-in dictionary with an explicit common-word share
    #[must_use]
    pub fn embedded_with_fraction(fraction: f64) -> Self {
        Self::with_common_fraction(DICTIONARY.iter().copied(), fraction)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn common(&self) -> &[Word] {
        &self.common
    }

    /// Split into the accepted-word set and the common subset
    #[must_use]
    pub fn into_parts(self) -> (Dictionary, Vec<Word>) {
        (self.dictionary, self.common)
    }
}

/// Load a ranked word list from a file, treating the top `fraction` as common
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use par_puzzle::wordlists::{COMMON_FRACTION, load_from_file};
///
/// let source = load_from_file("data/dictionary.txt", COMMON_FRACTION).unwrap();
/// println!("Loaded {} words", source.dictionary().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, fraction: f64) -> io::Result<WordSource> {
    let content = fs::read_to_string(path)?;
    Ok(WordSource::with_common_fraction(content.lines(), fraction))
}
