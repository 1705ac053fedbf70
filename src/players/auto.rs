//! Search-driven automated player.

use tracing::warn;

use crate::core::{Board, GameRng, Side, Square};
use crate::moves::lowest_legal_move;
use crate::search::{MoveSearch, SearchConfig};

use super::Player;

/// Plays whatever `MoveSearch` picks, falling back to the lowest legal
/// square if the search comes back empty-handed or with an illegal square.
#[derive(Clone, Debug, Default)]
pub struct AutoPlayer {
    search: MoveSearch,
}

impl AutoPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: MoveSearch::new(config),
        }
    }

    /// The underlying search, for its statistics.
    #[must_use]
    pub fn search(&self) -> &MoveSearch {
        &self.search
    }
}

impl Player for AutoPlayer {
    fn choose_move(&mut self, board: &Board, side: Side, _rng: &mut GameRng) -> Option<Square> {
        match self.search.choose_move(board, side) {
            Some(square) if board.is_legal(side, square) => Some(square),
            proposed => {
                let fallback = lowest_legal_move(board, side);
                warn!(%side, ?proposed, ?fallback, "search gave no legal move, using lowest legal square");
                fallback
            }
        }
    }

    fn name(&self) -> &str {
        "auto"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_legal_move() {
        let mut board = Board::new(3).unwrap();
        board.set_at(2, 2, 3, Side::Blue).unwrap();

        let mut player = AutoPlayer::default();
        let square = player
            .choose_move(&board, Side::Red, &mut GameRng::new(1))
            .unwrap();
        assert!(board.is_legal(Side::Red, square));
    }

    #[test]
    fn test_no_move_on_lost_board() {
        let mut board = Board::new(2).unwrap();
        for sq in board.squares() {
            board.set(sq, 1, Side::Blue).unwrap();
        }
        let mut player = AutoPlayer::default();
        assert_eq!(player.choose_move(&board, Side::Red, &mut GameRng::new(1)), None);
    }

    #[test]
    fn test_falls_back_on_won_board() {
        // Red already owns everything, so minimax has no move to report.
        let mut board = Board::new(2).unwrap();
        for sq in board.squares() {
            board.set(sq, 1, Side::Red).unwrap();
        }
        let mut player = AutoPlayer::new(SearchConfig::default().minimax_only());
        assert_eq!(player.choose_move(&board, Side::Red, &mut GameRng::new(1)), Some(0));
    }
}
