//! Player strategies.
//!
//! The session only depends on the [`Player`] capability: given a board and
//! a side, propose a square. Implementations:
//!
//! - [`AutoPlayer`]: the search-driven automated player
//! - [`ManualPlayer`]: plays moves queued by an external input source
//! - [`RandomPlayer`]: uniform random legal moves from the session RNG

mod auto;
mod manual;
mod random;

pub use auto::AutoPlayer;
pub use manual::ManualPlayer;
pub use random::RandomPlayer;

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRng, Side, Square};
use crate::search::SearchConfig;

/// Something that picks moves for a side.
pub trait Player: Send {
    /// Propose a square for `side` on `board`.
    ///
    /// Returns `None` when the player has nothing to offer yet (a manual
    /// player waiting for input) or no legal move exists.
    fn choose_move(&mut self, board: &Board, side: Side, rng: &mut GameRng) -> Option<Square>;

    /// Short display name.
    fn name(&self) -> &str;

    /// True if moves are produced without outside input.
    fn is_automated(&self) -> bool {
        true
    }
}

impl<'a> std::fmt::Debug for dyn Player + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which built-in player to seat for a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Manual,
    Auto,
    Random,
}

impl PlayerKind {
    /// Construct the player. `search` configures automated players.
    #[must_use]
    pub fn build(self, search: &SearchConfig) -> Box<dyn Player> {
        match self {
            PlayerKind::Manual => Box::new(ManualPlayer::new()),
            PlayerKind::Auto => Box::new(AutoPlayer::new(search.clone())),
            PlayerKind::Random => Box::new(RandomPlayer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let search = SearchConfig::default();
        assert!(!PlayerKind::Manual.build(&search).is_automated());
        assert!(PlayerKind::Auto.build(&search).is_automated());
        assert_eq!(PlayerKind::Random.build(&search).name(), "random");
    }

    #[test]
    fn test_debug_uses_name() {
        let player = PlayerKind::Auto.build(&SearchConfig::default());
        assert_eq!(format!("{:?}", player), "auto");
    }
}
