//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Automated player configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies of opponent reply searched after each spill candidate.
    pub spill_depth: u32,

    /// Plies searched after each candidate move when the heuristic stages
    /// find nothing. Every extra ply multiplies the cost by the number of
    /// legal moves.
    pub fallback_depth: u32,

    /// Look for chain-capture spills before anything else.
    pub spill_exploit: bool,

    /// Try the corner, edge, interior safe-move tiers before full search.
    pub tiered_moves: bool,

    /// Memoize static evaluations for the duration of one decision.
    pub cache_evaluations: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            spill_depth: 1,
            fallback_depth: 1,
            spill_exploit: true,
            tiered_moves: true,
            cache_evaluations: true,
        }
    }
}

impl SearchConfig {
    /// Set the lookahead used to rank spill candidates.
    #[must_use]
    pub fn with_spill_depth(mut self, depth: u32) -> Self {
        self.spill_depth = depth;
        self
    }

    /// Set the lookahead used by the fallback minimax.
    #[must_use]
    pub fn with_fallback_depth(mut self, depth: u32) -> Self {
        self.fallback_depth = depth;
        self
    }

    /// Enable or disable the spill-exploit stage.
    #[must_use]
    pub fn with_spill_exploit(mut self, enabled: bool) -> Self {
        self.spill_exploit = enabled;
        self
    }

    /// Enable or disable the tiered safe-move stage.
    #[must_use]
    pub fn with_tiered_moves(mut self, enabled: bool) -> Self {
        self.tiered_moves = enabled;
        self
    }

    /// Enable or disable the evaluation cache.
    #[must_use]
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_evaluations = enabled;
        self
    }

    /// Skip the heuristic stages and always run minimax.
    #[must_use]
    pub fn minimax_only(self) -> Self {
        self.with_spill_exploit(false).with_tiered_moves(false)
    }
}
