//! Core game types: sides, cells, the board and session randomness.
//!
//! The board is a plain state container. It knows nothing about players,
//! sessions or observers; everything else in the crate reads and mutates it
//! through the API defined here.

pub mod board;
pub mod cell;
pub mod rng;
pub mod side;

pub use board::{Adjacent, Board, Square, MAX_SIZE, MIN_SIZE};
pub use cell::Cell;
pub use rng::GameRng;
pub use side::Side;
