//! # jump61
//!
//! Board engine and automated player for Jump61, a two-player territorial
//! capture game on an N x N grid.
//!
//! ## Rules
//!
//! Every square starts neutral with one spot. Red and Blue alternate adding
//! a spot to a square that is neutral or their own. A square holding more
//! spots than it has orthogonal neighbors spills: it keeps one spot and
//! pushes one into each neighbor, capturing it, which can set off a chain.
//! A side wins by owning every square.
//!
//! ## Design Principles
//!
//! 1. **Plain State**: `Board` is a value. It can be cloned, hashed and
//!    compared, and the search simulates moves on private copies.
//!
//! 2. **Deterministic**: The cascade order is fixed and all randomness flows
//!    through a seeded `GameRng`, so a seed replays a whole game.
//!
//! 3. **Configuration Over Convention**: Search behavior and sessions are
//!    driven by `SearchConfig` and `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Sides, cells, the board and its cascade, RNG
//! - `moves`: Legal move enumeration and square tiers
//! - `search`: Static evaluator, minimax and the move-selection ladder
//! - `players`: The `Player` capability and built-in players
//! - `session`: Turn-taking game sessions and their events
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod moves;
pub mod players;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Adjacent, Board, Cell, GameRng, Side, Square, MAX_SIZE, MIN_SIZE};

pub use crate::error::{BoardError, GameError};

pub use crate::moves::{legal_moves, moves_by_tier, Tier};

pub use crate::search::{
    evaluate, Decision, Evaluator, MoveSearch, Score, Scored, SearchConfig, SearchStats, Stage,
    LOSS, WIN,
};

pub use crate::players::{AutoPlayer, ManualPlayer, Player, PlayerKind, RandomPlayer};

pub use crate::session::{Game, GameConfig, GameEvent, StepOutcome};
