//! Uniform random player.

use crate::core::{Board, GameRng, Side, Square};
use crate::moves::legal_moves;

use super::Player;

/// Picks uniformly among legal squares using the session RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlayer;

impl Player for RandomPlayer {
    fn choose_move(&mut self, board: &Board, side: Side, rng: &mut GameRng) -> Option<Square> {
        rng.choose(&legal_moves(board, side)).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}
