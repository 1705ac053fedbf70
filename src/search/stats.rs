//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected while choosing one move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Hypothetical boards built by cloning and applying a move.
    pub boards_simulated: u64,

    /// Static evaluations computed (cache misses included, hits excluded).
    pub evaluations: u64,

    /// Static evaluations answered from the cache.
    pub cache_hits: u64,

    /// Minimax nodes visited.
    pub nodes: u64,

    /// Total time spent deciding (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of static evaluations served from the cache.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.evaluations + self.cache_hits;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }

    /// Simulated boards per second.
    #[must_use]
    pub fn boards_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.boards_simulated as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
