//! Letter multisets
//!
//! `LetterCounts` is a fixed 26-slot tally of uppercase letters. Both the
//! submission validator and the letter accountant are expressed on it.

use super::ALPHABET;

/// A multiset over A–Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LetterCounts([usize; 26]);

/// First letter a requirement asks for more of than a supply holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub letter: char,
    pub needed: usize,
    pub available: usize,
}

#[inline]
fn slot(letter: u8) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper.is_ascii_uppercase().then(|| usize::from(upper - b'A'))
}

impl LetterCounts {
    /// Tally a sequence of letters
    ///
    /// Lowercase input is folded to uppercase; anything outside A–Z is ignored.
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut counts = Self::default();
        for &letter in letters {
            counts.add(letter);
        }
        counts
    }

    /// Add one occurrence of `letter`
    pub fn add(&mut self, letter: u8) {
        if let Some(i) = slot(letter) {
            self.0[i] += 1;
        }
    }

    /// Occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> usize {
        slot(letter).map_or(0, |i| self.0[i])
    }

    /// Sum over all letters
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Number of letters with a non-zero count
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&n| n > 0).count()
    }

    /// Largest count held by any single letter
    #[must_use]
    pub fn max_multiplicity(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Element-wise minimum with `supply`
    #[must_use]
    pub fn capped_by(&self, supply: &Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].min(supply.0[i])))
    }

    /// First letter (alphabetically) that `need` requires more of than `self` holds
    #[must_use]
    pub fn first_shortfall(&self, need: &Self) -> Option<Shortfall> {
        ALPHABET
            .iter()
            .zip(need.0.iter().zip(self.0.iter()))
            .find(|&(_, (&needed, &available))| needed > available)
            .map(|(&letter, (&needed, &available))| Shortfall {
                letter: char::from(letter),
                needed,
                available,
            })
    }

    /// Iterate `(letter, count)` over letters with a non-zero count
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        ALPHABET
            .iter()
            .zip(self.0.iter())
            .filter(|&(_, &n)| n > 0)
            .map(|(&letter, &n)| (char::from(letter), n))
    }
}
