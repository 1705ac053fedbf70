//! Error types.
//!
//! `BoardError` covers misuse of the board API: bad sizes, off-board
//! squares, illegal moves and malformed cell contents. `GameError` wraps it
//! for the session layer.

use crate::core::board::{Square, MAX_SIZE, MIN_SIZE};
use crate::core::Side;

/// Errors raised by `Board` operations.
///
/// A failed operation leaves the board unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size {0} is outside {min}..={max}", min = MIN_SIZE, max = MAX_SIZE)]
    InvalidSize(usize),

    #[error("square {square} is off a {size}x{size} board")]
    OffBoard { square: Square, size: usize },

    #[error("position ({row}, {col}) is off a {size}x{size} board")]
    OffBoardPosition { row: usize, col: usize, size: usize },

    #[error("{side} may not add a spot to square {square}")]
    IllegalMove { side: Side, square: Square },

    #[error("square {square} cannot hold {spots} spots for {side}")]
    InvalidCell { square: Square, spots: u8, side: Side },
}

/// Errors raised by a game session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("no game is in progress")]
    NotPlaying,

    #[error("game is over: {0} has won")]
    GameOver(Side),

    #[error("{0} has no legal move")]
    NoLegalMove(Side),

    #[error("{0} is not a player")]
    NotAPlayer(Side),
}
