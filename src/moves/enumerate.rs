//! Legal-move views over a board snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Side, Square};

/// Move-priority class by neighbor count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Corner,
    Edge,
    Interior,
}

impl Tier {
    /// All tiers in priority order: corners overflow fastest.
    pub const ALL: [Tier; 3] = [Tier::Corner, Tier::Edge, Tier::Interior];

    /// Neighbor count shared by every square in this tier.
    #[must_use]
    pub const fn neighbor_count(self) -> usize {
        match self {
            Tier::Corner => 2,
            Tier::Edge => 3,
            Tier::Interior => 4,
        }
    }

    /// Tier of `square` on `board`.
    #[must_use]
    pub fn of(board: &Board, square: Square) -> Tier {
        match board.neighbors(square) {
            2 => Tier::Corner,
            3 => Tier::Edge,
            _ => Tier::Interior,
        }
    }
}

/// Every square `side` may play, in index order.
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> Vec<Square> {
    board
        .squares()
        .filter(|&sq| board.is_legal(side, sq))
        .collect()
}

/// Legal moves for `side` restricted to one tier, in index order.
#[must_use]
pub fn moves_by_tier(board: &Board, side: Side, tier: Tier) -> Vec<Square> {
    board
        .squares()
        .filter(|&sq| Tier::of(board, sq) == tier && board.is_legal(side, sq))
        .collect()
}

/// Neighbors of `square` currently held by the opponent of `side`.
#[must_use]
pub fn opponent_neighbors(board: &Board, square: Square, side: Side) -> SmallVec<[Square; 4]> {
    let opponent = side.opposite();
    board
        .adjacent(square)
        .into_iter()
        .filter(|&sq| board[sq].owner() == opponent)
        .collect()
}

/// Lowest-index legal square for `side`: the last-resort move.
#[must_use]
pub fn lowest_legal_move(board: &Board, side: Side) -> Option<Square> {
    board.squares().find(|&sq| board.is_legal(side, sq))
}

/// True if `square` already holds as many spots as it has neighbors, so the
/// next spot spills it.
#[must_use]
pub fn at_capacity(board: &Board, square: Square) -> bool {
    usize::from(board[square].spots()) == board.neighbors(square)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        // . R .
        // B R .
        // . . B
        let mut board = Board::new(3).unwrap();
        board.set_at(1, 2, 2, Side::Red).unwrap();
        board.set_at(2, 1, 3, Side::Blue).unwrap();
        board.set_at(2, 2, 1, Side::Red).unwrap();
        board.set_at(3, 3, 1, Side::Blue).unwrap();
        board
    }

    #[test]
    fn test_legal_moves() {
        let board = sample();
        assert_eq!(legal_moves(&board, Side::Red), vec![0, 1, 2, 4, 5, 6, 7]);
        assert_eq!(legal_moves(&board, Side::Blue), vec![0, 2, 3, 5, 6, 7, 8]);
        assert!(legal_moves(&board, Side::Neutral).is_empty());
    }

    #[test]
    fn test_moves_by_tier() {
        let board = sample();
        assert_eq!(moves_by_tier(&board, Side::Red, Tier::Corner), vec![0, 2, 6]);
        assert_eq!(moves_by_tier(&board, Side::Red, Tier::Edge), vec![1, 5, 7]);
        assert_eq!(moves_by_tier(&board, Side::Red, Tier::Interior), vec![4]);
        assert!(moves_by_tier(&board, Side::Blue, Tier::Interior).is_empty());
    }

    #[test]
    fn test_tier_of() {
        let board = Board::new(4).unwrap();
        assert_eq!(Tier::of(&board, 0), Tier::Corner);
        assert_eq!(Tier::of(&board, 2), Tier::Edge);
        assert_eq!(Tier::of(&board, 5), Tier::Interior);
    }

    #[test]
    fn test_opponent_neighbors() {
        let board = sample();
        // (2,2) touches Red (1,2), Blue (2,1) and neutral squares.
        assert_eq!(opponent_neighbors(&board, 4, Side::Red).as_slice(), &[3]);
        assert_eq!(opponent_neighbors(&board, 4, Side::Blue).as_slice(), &[1]);
        assert!(opponent_neighbors(&board, 2, Side::Red).is_empty());
    }

    #[test]
    fn test_lowest_legal_move() {
        let mut board = Board::new(2).unwrap();
        board.set(0, 1, Side::Blue).unwrap();
        board.set(1, 1, Side::Blue).unwrap();
        assert_eq!(lowest_legal_move(&board, Side::Red), Some(2));
        assert_eq!(lowest_legal_move(&board, Side::Blue), Some(0));

        board.set(2, 1, Side::Blue).unwrap();
        board.set(3, 1, Side::Blue).unwrap();
        assert_eq!(lowest_legal_move(&board, Side::Red), None);
    }

    #[test]
    fn test_at_capacity() {
        let board = sample();
        assert!(at_capacity(&board, 3));
        assert!(!at_capacity(&board, 1));
    }
}
