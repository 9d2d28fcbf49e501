//! Hard-mode board
//!
//! A flat copy of the puzzle letters where two cells are exchanged directly.
//! The exchange is deferred: choosing the second cell schedules it for
//! `now + delay`, and it is applied by the first [`HardBoard::tick`] at or
//! after that instant. At most one exchange is pending; it can be cancelled
//! until it fires and fires at most once.

use crate::core::{GRID_SIZE, ROWS, WORD_LEN};
use crate::wordlists::Dictionary;
use std::time::{Duration, Instant};
use tracing::debug;

/// Identifies one scheduled exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExchangeToken(u64);

/// An exchange waiting for its delay to elapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledExchange {
    pub a: usize,
    pub b: usize,
    pub due: Instant,
    pub token: ExchangeToken,
}

/// What a click did on the hard board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardClick {
    /// The cell became the anchor
    Anchored(usize),
    /// The anchor was clicked again and released
    Released,
    /// An exchange with the anchor was scheduled
    Scheduled(ScheduledExchange),
}

#[derive(Debug, Clone)]
pub struct HardBoard {
    letters: [u8; GRID_SIZE],
    anchor: Option<usize>,
    pending: Option<ScheduledExchange>,
    swap_count: usize,
    next_token: u64,
    delay: Duration,
    complete: bool,
}

impl HardBoard {
    #[must_use]
    pub fn new(letters: [u8; GRID_SIZE], delay: Duration, dictionary: &Dictionary) -> Self {
        let mut board = Self {
            letters,
            anchor: None,
            pending: None,
            swap_count: 0,
            next_token: 0,
            delay,
            complete: false,
        };
        board.complete = board.rows_valid(dictionary).iter().all(|&ok| ok);
        board
    }

    #[must_use]
    pub const fn letters(&self) -> &[u8; GRID_SIZE] {
        &self.letters
    }

    /// Exchanges applied or pending
    #[must_use]
    pub const fn swap_count(&self) -> usize {
        self.swap_count
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&ScheduledExchange> {
        self.pending.as_ref()
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Highlighted cells: the anchor, or both cells of a pending exchange
    #[must_use]
    pub fn selected(&self) -> Vec<usize> {
        match (self.pending, self.anchor) {
            (Some(pending), _) => vec![pending.a, pending.b],
            (None, Some(anchor)) => vec![anchor],
            (None, None) => Vec::new(),
        }
    }

    /// Handle a click on `index` at time `now`
    ///
    /// A click while an exchange is pending cancels that exchange and makes
    /// the clicked cell the new anchor.
    pub fn select_cell(&mut self, index: usize, now: Instant) -> HardClick {
        if self.cancel_pending().is_some() {
            self.anchor = Some(index);
            return HardClick::Anchored(index);
        }

        match self.anchor {
            Some(anchor) if anchor == index => {
                self.anchor = None;
                HardClick::Released
            }
            Some(anchor) => {
                let exchange = ScheduledExchange {
                    a: anchor,
                    b: index,
                    due: now + self.delay,
                    token: ExchangeToken(self.next_token),
                };
                self.next_token += 1;
                self.swap_count += 1;
                self.anchor = None;
                self.pending = Some(exchange);
                debug!(a = anchor, b = index, "exchange scheduled");
                HardClick::Scheduled(exchange)
            }
            None => {
                self.anchor = Some(index);
                HardClick::Anchored(index)
            }
        }
    }

    /// Drop the pending exchange, if any, and roll back its count
    pub fn cancel_pending(&mut self) -> Option<ScheduledExchange> {
        let cancelled = self.pending.take()?;
        self.swap_count -= 1;
        debug!(a = cancelled.a, b = cancelled.b, "exchange cancelled");
        Some(cancelled)
    }

    /// Cancel only if `token` still names the pending exchange
    pub fn cancel(&mut self, token: ExchangeToken) -> bool {
        if self.pending.is_some_and(|p| p.token == token) {
            self.cancel_pending();
            true
        } else {
            false
        }
    }

    /// Release the anchor and cancel any pending exchange
    pub fn clear_selection(&mut self) {
        self.cancel_pending();
        self.anchor = None;
    }

    /// Apply the pending exchange if it is due at `now`
    pub fn tick(&mut self, now: Instant, dictionary: &Dictionary) -> Option<ScheduledExchange> {
        match self.pending {
            Some(pending) if pending.due <= now => {
                self.pending = None;
                self.letters.swap(pending.a, pending.b);
                self.complete = self.rows_valid(dictionary).iter().all(|&ok| ok);
                debug!(
                    a = pending.a,
                    b = pending.b,
                    swaps = self.swap_count,
                    complete = self.complete,
                    "exchange applied"
                );
                Some(pending)
            }
            _ => None,
        }
    }

    /// Row `row` as a string
    #[must_use]
    pub fn row(&self, row: usize) -> String {
        self.letters[row * WORD_LEN..(row + 1) * WORD_LEN]
            .iter()
            .map(|&c| char::from(c))
            .collect()
    }

    /// Dictionary membership of each row
    #[must_use]
    pub fn rows_valid(&self, dictionary: &Dictionary) -> [bool; ROWS] {
        std::array::from_fn(|row| dictionary.contains(&self.row(row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    const LETTERS: &[u8; 25] = b"ABCDEFGHIJKLMNOPQRSTUVWXY";
    const DELAY: Duration = Duration::from_millis(500);

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    fn board() -> HardBoard {
        HardBoard::new(*LETTERS, DELAY, &dictionary(&["ABCDE"]))
    }

    #[test]
    fn exchange_waits_for_delay() {
        let dict = dictionary(&["ABCDE"]);
        let mut hard = board();
        let t0 = Instant::now();

        assert_eq!(hard.select_cell(0, t0), HardClick::Anchored(0));
        assert_eq!(hard.selected(), vec![0]);

        let HardClick::Scheduled(exchange) = hard.select_cell(1, t0) else {
            panic!("expected an exchange to be scheduled");
        };
        assert_eq!(exchange.due, t0 + DELAY);
        assert_eq!(hard.selected(), vec![0, 1]);
        assert_eq!(hard.letters()[0], b'A');
        assert_eq!(hard.swap_count(), 1);

        assert!(hard.tick(t0 + Duration::from_millis(499), &dict).is_none());
        assert_eq!(hard.letters()[0], b'A');

        assert!(hard.tick(t0 + DELAY, &dict).is_some());
        assert_eq!(&hard.letters()[..2], b"BA");
        assert_eq!(hard.swap_count(), 1);
        assert!(hard.selected().is_empty());

        // Fires once
        assert!(hard.tick(t0 + DELAY * 4, &dict).is_none());
        assert_eq!(&hard.letters()[..2], b"BA");
    }

    #[test]
    fn clicking_anchor_again_releases() {
        let mut hard = board();
        let now = Instant::now();
        hard.select_cell(3, now);
        assert_eq!(hard.select_cell(3, now), HardClick::Released);
        assert!(hard.selected().is_empty());
        assert_eq!(hard.swap_count(), 0);
    }

    #[test]
    fn click_during_pending_cancels_and_reanchors() {
        let dict = dictionary(&["ABCDE"]);
        let mut hard = board();
        let now = Instant::now();
        hard.select_cell(0, now);
        hard.select_cell(24, now);

        assert_eq!(hard.select_cell(7, now), HardClick::Anchored(7));
        assert_eq!(hard.swap_count(), 0);
        assert!(hard.pending().is_none());
        assert!(hard.tick(now + DELAY, &dict).is_none());
        assert_eq!(hard.letters(), LETTERS);
        assert_eq!(hard.selected(), vec![7]);
    }

    #[test]
    fn cancel_by_stale_token_is_ignored() {
        let mut hard = board();
        let now = Instant::now();
        hard.select_cell(0, now);
        let HardClick::Scheduled(first) = hard.select_cell(1, now) else {
            panic!("expected an exchange");
        };
        hard.select_cell(2, now); // cancels first, anchors 2
        let HardClick::Scheduled(second) = hard.select_cell(3, now) else {
            panic!("expected an exchange");
        };

        assert!(!hard.cancel(first.token));
        assert!(hard.pending().is_some());
        assert!(hard.cancel(second.token));
        assert!(hard.pending().is_none());
        assert_eq!(hard.swap_count(), 0);
    }

    #[test]
    fn completion_requires_every_row() {
        let dict = dictionary(&["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY"]);
        let hard = HardBoard::new(*LETTERS, DELAY, &dict);
        assert!(hard.is_complete());

        let scrambled = *b"BACDEFGHIJKLMNOPQRSTUVWXY";
        let mut hard = HardBoard::new(scrambled, DELAY, &dict);
        assert!(!hard.is_complete());
        assert_eq!(hard.rows_valid(&dict), [false, true, true, true, true]);

        let now = Instant::now();
        hard.select_cell(1, now);
        hard.select_cell(0, now);
        hard.tick(now + DELAY, &dict);
        assert!(hard.is_complete());
        assert_eq!(hard.swap_count(), 1);
    }
}
