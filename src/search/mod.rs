//! Automated player search.
//!
//! ## Overview
//!
//! [`MoveSearch`] picks a move for one side through a three-stage ladder:
//! chain-capture spills, safe squares by tier, then depth-limited minimax
//! scored by the [`Evaluator`]. All exploration happens on cloned boards;
//! the caller's board is only read.
//!
//! ## Usage
//!
//! ```rust
//! use jump61::core::{Board, Side};
//! use jump61::search::{MoveSearch, SearchConfig};
//!
//! let board = Board::new(4).unwrap();
//! let mut search = MoveSearch::new(SearchConfig::default());
//!
//! let square = search.choose_move(&board, Side::Red).unwrap();
//! assert!(board.is_legal(Side::Red, square));
//! ```
//!
//! There is no time limit or cancellation; cost is bounded only by the
//! configured depths. Callers that need responsiveness should run the
//! search off their main thread.

pub mod config;
pub mod engine;
pub mod evaluator;
pub mod stats;

pub use config::SearchConfig;
pub use engine::{safe_move, spill_candidates, Decision, MoveSearch, Scored, Stage};
pub use evaluator::{evaluate, terminal_score, Evaluator, Score, LOSS, WIN};
pub use stats::SearchStats;
