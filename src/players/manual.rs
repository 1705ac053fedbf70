//! Player fed by an outside input source.

use std::collections::VecDeque;

use tracing::warn;

use crate::core::{Board, GameRng, Side, Square};

use super::Player;

/// Plays `(row, col)` moves queued by whatever collects human input.
///
/// Positions are resolved against the board at the time they are played;
/// off-board entries are dropped. Legality is left to the session.
#[derive(Clone, Debug, Default)]
pub struct ManualPlayer {
    pending: VecDeque<(usize, usize)>,
}

impl ManualPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A player with moves already queued, played in order.
    pub fn with_moves(moves: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            pending: moves.into_iter().collect(),
        }
    }

    /// Queue a 1-indexed `(row, col)` move.
    pub fn push_move(&mut self, row: usize, col: usize) {
        self.pending.push_back((row, col));
    }

    /// Number of queued moves.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Player for ManualPlayer {
    fn choose_move(&mut self, board: &Board, side: Side, _rng: &mut GameRng) -> Option<Square> {
        while let Some((row, col)) = self.pending.pop_front() {
            match board.square(row, col) {
                Some(square) => return Some(square),
                None => warn!(%side, row, col, "dropping off-board move"),
            }
        }
        None
    }

    fn name(&self) -> &str {
        "manual"
    }

    fn is_automated(&self) -> bool {
        false
    }
}
