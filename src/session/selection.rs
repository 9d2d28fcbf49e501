//! The player's in-progress, ordered choice of cells

use crate::core::WORD_LEN;

/// Ordered, distinct board indices; at most five
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Vec<usize>);

impl Selection {
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.len() >= WORD_LEN
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// The five indices of a complete selection
    #[must_use]
    pub fn as_word(&self) -> Option<[usize; WORD_LEN]> {
        self.0.as_slice().try_into().ok()
    }

    pub(crate) fn push(&mut self, index: usize) {
        debug_assert!(!self.is_full() && !self.contains(index));
        self.0.push(index);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_word_requires_five() {
        let mut selection = Selection::default();
        for i in [3, 1, 4, 0] {
            selection.push(i);
        }
        assert_eq!(selection.as_word(), None);
        assert!(!selection.is_full());

        selection.push(9);
        assert_eq!(selection.as_word(), Some([3, 1, 4, 0, 9]));
        assert!(selection.is_full());
        assert_eq!(selection.last(), Some(9));
    }

    #[test]
    fn pop_and_clear() {
        let mut selection = Selection::default();
        assert_eq!(selection.pop(), None);
        selection.push(2);
        selection.push(7);
        assert_eq!(selection.pop(), Some(7));
        assert_eq!(selection.indices(), &[2]);
        selection.clear();
        assert!(selection.is_empty());
    }
}
