//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::{MAX_SIZE, MIN_SIZE};
use crate::error::BoardError;
use crate::players::PlayerKind;
use crate::search::SearchConfig;

/// Everything needed to open a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length (2-10).
    pub size: usize,

    /// Seed for the session RNG.
    pub seed: u64,

    /// Who plays Red.
    pub red: PlayerKind,

    /// Who plays Blue.
    pub blue: PlayerKind,

    /// Settings for automated players.
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 6,
            seed: 42,
            red: PlayerKind::Manual,
            blue: PlayerKind::Auto,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Seat `red` and `blue`.
    #[must_use]
    pub fn with_players(mut self, red: PlayerKind, blue: PlayerKind) -> Self {
        self.red = red;
        self.blue = blue;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Check the board size.
    pub fn validate(&self) -> Result<(), BoardError> {
        if (MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            Ok(())
        } else {
            Err(BoardError::InvalidSize(self.size))
        }
    }
}
