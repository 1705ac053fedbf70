//! Move enumeration.
//!
//! Pure functions over a board snapshot that list legal squares, optionally
//! split by [`Tier`]. Corner and edge squares overflow with fewer spots than
//! interior ones, so the automated player looks at them first.

mod enumerate;

pub use enumerate::{
    at_capacity, legal_moves, lowest_legal_move, moves_by_tier, opponent_neighbors, Tier,
};
