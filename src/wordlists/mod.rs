//! Word lists for the daily grid
//!
//! The word source is an external collaborator: the core only consumes the
//! full accepted-word set and the ranked "common" subset it produces.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use loader::{COMMON_FRACTION, Dictionary, WordSource, load_from_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_entries_are_valid_words() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_alphabetic()),
                "Word '{word}' contains non-letters"
            );
        }
    }

    #[test]
    fn embedded_source_covers_alphabet() {
        let source = WordSource::embedded();
        for &letter in crate::core::ALPHABET {
            assert!(
                source.common().iter().any(|w| w.has_letter(letter)),
                "no common word contains {}",
                char::from(letter)
            );
        }
    }
}
