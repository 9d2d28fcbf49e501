//! Game tunables
//!
//! Command-line flags map onto these; the library never reads the
//! environment itself.

use crate::wordlists::COMMON_FRACTION;
use std::time::Duration;

/// Default delay between choosing two hard-mode cells and exchanging them
pub const DEFAULT_SWAP_DELAY: Duration = Duration::from_millis(500);

/// Settings shared by the session and the front ends
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// How long a hard-mode exchange stays pending before it is applied
    pub swap_delay: Duration,
    /// Share of the ranked word list treated as common
    pub common_fraction: f64,
}

impl GameConfig {
    #[must_use]
    pub const fn new(swap_delay: Duration, common_fraction: f64) -> Self {
        Self {
            swap_delay,
            common_fraction,
        }
    }

    /// Exchanges apply on the next tick; handy for line-oriented front ends
    #[must_use]
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO, COMMON_FRACTION)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SWAP_DELAY, COMMON_FRACTION)
    }
}
