//! The game board and its overflow cascade.
//!
//! ## Layout
//!
//! Squares are numbered row-major from 0. Rows and columns are 1-indexed at
//! the API boundary, so on a 4x4 board square `(2, 3)` is index 6:
//!
//! ```text
//!          col 1  2  3  4
//!   row 1      0  1  2  3
//!   row 2      4  5  6  7
//!   row 3      8  9 10 11
//!   row 4     12 13 14 15
//! ```
//!
//! ## Cascade
//!
//! Adding a spot to a square that already holds as many spots as it has
//! neighbors makes it spill: it drops back to one spot and each neighbor
//! (left, right, up, down) is captured for the mover and receives a spot,
//! which may spill in turn. Neighbors are fed depth-first in that fixed
//! order, so the final board is fully determined by the move.
//!
//! Once one side owns every square nothing spills any more. The overflowing
//! square still resets to one spot, and the spots it would have handed out
//! are dropped from the piece count.
//!
//! ## Example
//!
//! ```
//! use jump61::core::{Board, Side};
//!
//! let mut board = Board::new(6).unwrap();
//! board.add_spot_at(Side::Red, 1, 1).unwrap();
//! board.add_spot_at(Side::Blue, 2, 1).unwrap();
//! board.add_spot_at(Side::Red, 1, 1).unwrap();
//!
//! // The corner spilled into both of its neighbors, capturing Blue's square.
//! assert_eq!(board.get_at(2, 1).unwrap().owner(), Side::Red);
//! assert_eq!(board.get_at(2, 1).unwrap().spots(), 3);
//! assert_eq!(board.num_of_side(Side::Blue), 0);
//! ```

use std::ops::Index;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::BoardError;

use super::cell::Cell;
use super::side::Side;

/// Row-major square index.
pub type Square = usize;

/// Smallest supported board edge.
pub const MIN_SIZE: usize = 2;

/// Largest supported board edge.
pub const MAX_SIZE: usize = 10;

/// In-bounds orthogonal neighbors of a square, in cascade order.
pub type Adjacent = SmallVec<[Square; 4]>;

// Inline capacity covers MAX_SIZE * MAX_SIZE, so cloning a board never allocates.
type Cells = SmallVec<[Cell; 128]>;

/// An N x N board.
///
/// Tracks the total spot count and per-player square counts incrementally,
/// so `num_pieces`, `num_of_side` and `winner` are O(1).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Cells,
    total_spots: usize,
    owned: [usize; 2],
}

impl Board {
    /// Create an empty board of the given size.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        let count = size * size;
        Self {
            size,
            cells: SmallVec::from_elem(Cell::EMPTY, count),
            total_spots: count,
            owned: [0, 0],
        }
    }

    /// Reset to an empty board of `size`. On error the board is unchanged.
    pub fn clear(&mut self, size: usize) -> Result<(), BoardError> {
        check_size(size)?;
        *self = Self::empty(size);
        Ok(())
    }

    /// Replace this board's contents with a copy of `other`.
    pub fn copy_from(&mut self, other: &Board) {
        self.clone_from(other);
    }

    // === Geometry ===

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares (`size * size`).
    #[must_use]
    pub fn square_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over every square index.
    pub fn squares(&self) -> std::ops::Range<Square> {
        0..self.square_count()
    }

    #[must_use]
    pub fn exists(&self, square: Square) -> bool {
        square < self.square_count()
    }

    #[must_use]
    pub fn exists_at(&self, row: usize, col: usize) -> bool {
        (1..=self.size).contains(&row) && (1..=self.size).contains(&col)
    }

    /// Square index for a 1-indexed `(row, col)`.
    #[must_use]
    pub fn square(&self, row: usize, col: usize) -> Option<Square> {
        self.exists_at(row, col)
            .then(|| (row - 1) * self.size + (col - 1))
    }

    fn position(&self, row: usize, col: usize) -> Result<Square, BoardError> {
        self.square(row, col).ok_or(BoardError::OffBoardPosition {
            row,
            col,
            size: self.size,
        })
    }

    /// 1-indexed row of `square`.
    #[must_use]
    pub fn row(&self, square: Square) -> usize {
        square / self.size + 1
    }

    /// 1-indexed column of `square`.
    #[must_use]
    pub fn col(&self, square: Square) -> usize {
        square % self.size + 1
    }

    /// Number of orthogonal neighbors: 2 for corners, 3 for edges, 4 inside.
    #[must_use]
    pub fn neighbors(&self, square: Square) -> usize {
        let last = self.size - 1;
        let on_edge = |v: usize| usize::from(v == 0 || v == last);
        4 - on_edge(square / self.size) - on_edge(square % self.size)
    }

    /// In-bounds orthogonal neighbors of `square`: left, right, up, down.
    #[must_use]
    pub fn adjacent(&self, square: Square) -> Adjacent {
        let (r, c) = (square / self.size, square % self.size);
        let mut out = Adjacent::new();
        if c > 0 {
            out.push(square - 1);
        }
        if c + 1 < self.size {
            out.push(square + 1);
        }
        if r > 0 {
            out.push(square - self.size);
        }
        if r + 1 < self.size {
            out.push(square + self.size);
        }
        out
    }

    // === Contents ===

    /// Contents of `square`, or `None` if off the board.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Cell> {
        self.cells.get(square).copied()
    }

    #[must_use]
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.square(row, col).and_then(|sq| self.get(sq))
    }

    /// All cells in square order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total spots on the board, one per untouched square included.
    #[must_use]
    pub fn num_pieces(&self) -> usize {
        self.total_spots
    }

    /// Squares owned by `side`. For `Neutral`, the unclaimed squares.
    #[must_use]
    pub fn num_of_side(&self, side: Side) -> usize {
        match side.player_index() {
            Some(i) => self.owned[i],
            None => self.square_count() - self.owned[0] - self.owned[1],
        }
    }

    /// The side owning every square, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        Side::PLAYERS
            .into_iter()
            .find(|&side| self.num_of_side(side) == self.square_count())
    }

    /// Side to move. Red moves when an even number of spots has been placed
    /// since the board was empty, Blue otherwise.
    #[must_use]
    pub fn whose_move(&self) -> Side {
        // Every square holds at least one spot, so this never underflows.
        if (self.total_spots - self.square_count()) % 2 == 0 {
            Side::Red
        } else {
            Side::Blue
        }
    }

    /// True if `side` may add a spot to `square`.
    #[must_use]
    pub fn is_legal(&self, side: Side, square: Square) -> bool {
        self.get(square).is_some_and(|cell| cell.accepts(side))
    }

    #[must_use]
    pub fn is_legal_at(&self, side: Side, row: usize, col: usize) -> bool {
        self.square(row, col)
            .is_some_and(|sq| self.is_legal(side, sq))
    }

    // === Mutation ===

    /// Add a spot for `side` to `square` and resolve any cascade.
    ///
    /// Rejects off-board squares and squares owned by the opponent without
    /// touching the board.
    pub fn add_spot(&mut self, side: Side, square: Square) -> Result<(), BoardError> {
        if !self.exists(square) {
            return Err(BoardError::OffBoard {
                square,
                size: self.size,
            });
        }
        if !self.is_legal(side, square) {
            return Err(BoardError::IllegalMove { side, square });
        }
        self.cascade(side, square);
        Ok(())
    }

    pub fn add_spot_at(&mut self, side: Side, row: usize, col: usize) -> Result<(), BoardError> {
        let square = self.position(row, col)?;
        self.add_spot(side, square)
    }

    /// Overwrite a square for scenario setup, bypassing the cascade.
    ///
    /// `spots` must be between 1 and the square's neighbor count, and a
    /// Neutral square must hold exactly one spot.
    pub fn set(&mut self, square: Square, spots: u8, side: Side) -> Result<(), BoardError> {
        if !self.exists(square) {
            return Err(BoardError::OffBoard {
                square,
                size: self.size,
            });
        }
        let fits = spots >= 1 && usize::from(spots) <= self.neighbors(square);
        if !fits || (side == Side::Neutral && spots != 1) {
            return Err(BoardError::InvalidCell { square, spots, side });
        }
        self.put(square, Cell::new(side, spots));
        Ok(())
    }

    pub fn set_at(&mut self, row: usize, col: usize, spots: u8, side: Side) -> Result<(), BoardError> {
        let square = self.position(row, col)?;
        self.set(square, spots, side)
    }

    /// Store `cell` at `square`, keeping the running totals in step.
    fn put(&mut self, square: Square, cell: Cell) {
        let old = std::mem::replace(&mut self.cells[square], cell);
        self.total_spots = self.total_spots + usize::from(cell.spots()) - usize::from(old.spots());
        if let Some(i) = old.owner().player_index() {
            self.owned[i] -= 1;
        }
        if let Some(i) = cell.owner().player_index() {
            self.owned[i] += 1;
        }
    }

    /// Give `square` to `side` with one more spot. Returns true if it
    /// spilled and its neighbors must now be fed.
    fn bump(&mut self, side: Side, square: Square) -> bool {
        let capacity = self.neighbors(square);
        let spots = usize::from(self.cells[square].spots()) + 1;
        if spots <= capacity {
            // spots <= 4 here
            self.put(square, Cell::new(side, spots as u8));
            return false;
        }
        self.put(square, Cell::new(side, 1));
        self.winner().is_none()
    }

    fn cascade(&mut self, side: Side, start: Square) {
        // Stack of spilled squares, each with the index of the next
        // neighbor it still has to feed.
        let mut pending: Vec<(Square, usize)> = Vec::new();
        if self.bump(side, start) {
            pending.push((start, 0));
        }
        while let Some(frame) = pending.last_mut() {
            let (square, next) = *frame;
            let Some(&target) = self.adjacent(square).get(next) else {
                pending.pop();
                continue;
            };
            frame.1 += 1;
            let captured = self.cells[target].with_owner(side);
            self.put(target, captured);
            if self.bump(side, target) {
                pending.push((target, 0));
            }
        }
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, square: Square) -> &Cell {
        &self.cells[square]
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::InvalidSize(size))
    }
}
