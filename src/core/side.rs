//! Square owners.
//!
//! `Red` and `Blue` are the two players. `Neutral` marks a square nobody has
//! claimed yet; it never moves.

use serde::{Deserialize, Serialize};

/// Owner of a square, or the side making a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Blue,
    Neutral,
}

impl Side {
    /// The two sides that take turns, in turn order.
    pub const PLAYERS: [Side; 2] = [Side::Red, Side::Blue];

    /// The other player.
    ///
    /// `Neutral` has no opponent and maps to itself.
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
            Side::Neutral => Side::Neutral,
        }
    }

    /// True for `Red` and `Blue`.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Side::Neutral)
    }

    /// Dense index for per-player tables (`Red` = 0, `Blue` = 1).
    ///
    /// Returns `None` for `Neutral`.
    #[must_use]
    pub const fn player_index(self) -> Option<usize> {
        match self {
            Side::Red => Some(0),
            Side::Blue => Some(1),
            Side::Neutral => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Red => "Red",
            Side::Blue => "Blue",
            Side::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}
