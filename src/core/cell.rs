//! Contents of a single square.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// One square's owner and spot count.
///
/// Cells are plain values; the board replaces them wholesale rather than
/// mutating in place. An unclaimed square is always `Cell::EMPTY`
/// (Neutral with one spot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    owner: Side,
    spots: u8,
}

impl Cell {
    /// Rest state of an untouched square.
    pub const EMPTY: Cell = Cell {
        owner: Side::Neutral,
        spots: 1,
    };

    /// Create a cell. The board validates shape before storing one.
    #[must_use]
    pub const fn new(owner: Side, spots: u8) -> Self {
        Self { owner, spots }
    }

    #[must_use]
    pub const fn owner(self) -> Side {
        self.owner
    }

    #[must_use]
    pub const fn spots(self) -> u8 {
        self.spots
    }

    /// Same spot count under a different owner.
    #[must_use]
    pub const fn with_owner(self, owner: Side) -> Self {
        Self {
            owner,
            spots: self.spots,
        }
    }

    /// True if `side` may add a spot here.
    #[must_use]
    pub fn accepts(self, side: Side) -> bool {
        side.is_player() && (self.owner == side || self.owner == Side::Neutral)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}
