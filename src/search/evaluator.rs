//! Static board evaluation for minimax leaves.
//!
//! The one-sided heuristic looks one move ahead for the evaluated side and
//! one reply ahead for its opponent:
//!
//! ```text
//! evaluate(side) = held(side) + max(0, max over moves m of
//!                      held(side after m) - best_reply)
//! ```
//!
//! where `held` is the number of squares owned (or `WIN` for a full board)
//! and `best_reply` is the largest holding the opponent has reached with any
//! single reply simulated so far in the scan, across all of `side`'s moves.
//! A move of `side` that fills the board makes the whole value `WIN`. The
//! leaf score is `evaluate(side) - evaluate(opponent)`.

use rustc_hash::FxHashMap;

use crate::core::{Board, Side, Square};
use crate::moves::legal_moves;

use super::stats::SearchStats;

/// Minimax score. Larger is better for the side being scored.
pub type Score = i64;

/// Score of a board the scored side has won.
pub const WIN: Score = i64::MAX;

/// Score of a board the scored side has lost. Exactly `-WIN`, so negating a
/// score never overflows.
pub const LOSS: Score = -WIN;

/// `WIN` or `LOSS` if the board is already decided.
#[must_use]
pub fn terminal_score(side: Side, board: &Board) -> Option<Score> {
    board
        .winner()
        .map(|winner| if winner == side { WIN } else { LOSS })
}

/// Clone `board` and play `square` for `side` on the copy.
pub(crate) fn simulate(
    board: &Board,
    side: Side,
    square: Square,
    stats: &mut SearchStats,
) -> Option<Board> {
    let mut next = board.clone();
    next.add_spot(side, square).ok()?;
    stats.boards_simulated += 1;
    Some(next)
}

/// Squares held by `side`, or `WIN` if that is every square.
fn holding(side: Side, board: &Board) -> Score {
    let held = board.num_of_side(side);
    if held == board.square_count() {
        WIN
    } else {
        held as Score
    }
}

/// Static evaluator with an optional per-decision cache.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    caching: bool,
    // One table per player, keyed by the board.
    cache: [FxHashMap<Board, Score>; 2],
}

impl Evaluator {
    #[must_use]
    pub fn new(caching: bool) -> Self {
        Self {
            caching,
            cache: Default::default(),
        }
    }

    /// Forget cached scores.
    pub fn clear(&mut self) {
        for table in &mut self.cache {
            table.clear();
        }
    }

    /// Number of cached scores.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.iter().map(FxHashMap::len).sum()
    }

    /// Leaf score of `board` from `side`'s point of view.
    pub fn static_eval(&mut self, side: Side, board: &Board, stats: &mut SearchStats) -> Score {
        if let Some(score) = terminal_score(side, board) {
            return score;
        }
        let slot = side.player_index();
        if self.caching {
            if let Some(&score) = slot.and_then(|i| self.cache[i].get(board)) {
                stats.cache_hits += 1;
                return score;
            }
        }

        stats.evaluations += 1;
        let score = evaluate(side, board, stats).saturating_sub(evaluate(side.opposite(), board, stats));

        if self.caching {
            if let Some(i) = slot {
                self.cache[i].insert(board.clone(), score);
            }
        }
        score
    }
}

/// One-sided heuristic value of `board` for `side`.
#[must_use]
pub fn evaluate(side: Side, board: &Board, stats: &mut SearchStats) -> Score {
    let opponent = side.opposite();
    let mut best_margin: Score = 0;
    let mut best_reply: Score = 0;

    for square in legal_moves(board, side) {
        let Some(next) = simulate(board, side, square, stats) else {
            continue;
        };
        let held = holding(side, &next);
        if held == WIN {
            return WIN;
        }
        for reply in legal_moves(&next, opponent) {
            if let Some(after) = simulate(&next, opponent, reply, stats) {
                best_reply = best_reply.max(holding(opponent, &after));
            }
        }
        best_margin = best_margin.max(held.saturating_sub(best_reply));
    }

    holding(side, board).saturating_add(best_margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_score() {
        let mut board = Board::new(2).unwrap();
        assert_eq!(terminal_score(Side::Red, &board), None);
        for sq in board.squares() {
            board.set(sq, 1, Side::Red).unwrap();
        }
        assert_eq!(terminal_score(Side::Red, &board), Some(WIN));
        assert_eq!(terminal_score(Side::Blue, &board), Some(LOSS));
    }

    #[test]
    fn test_evaluate_empty_board() {
        // Any single move takes one square; the best reply also takes one.
        let board = Board::new(3).unwrap();
        let mut stats = SearchStats::new();
        assert_eq!(evaluate(Side::Red, &board, &mut stats), 0);
        assert_eq!(stats.boards_simulated, 9 + 9 * 8);
    }

    #[test]
    fn test_evaluate_counts_captures() {
        // Red's corner at capacity spills into Blue's lone square and the
        // square below it. Blue is then left replying on neutral squares.
        let mut board = Board::new(3).unwrap();
        board.set_at(1, 1, 2, Side::Red).unwrap();
        board.set_at(1, 2, 1, Side::Blue).unwrap();

        let mut stats = SearchStats::new();
        assert_eq!(evaluate(Side::Red, &board, &mut stats), 3);
        assert_eq!(evaluate(Side::Blue, &board, &mut stats), 1);
        assert_eq!(
            Evaluator::new(false).static_eval(Side::Red, &board, &mut stats),
            2
        );
    }

    #[test]
    fn test_best_reply_carries_across_moves() {
        // . R
        // . B
        // Blue's corner spill holds 3 squares against a best Red reply of 1,
        // but Red's best reply to an earlier Blue move (2) is still counted.
        let mut board = Board::new(2).unwrap();
        board.set(1, 1, Side::Red).unwrap();
        board.set(3, 2, Side::Blue).unwrap();

        let mut stats = SearchStats::new();
        assert_eq!(evaluate(Side::Blue, &board, &mut stats), 2);
        assert_eq!(evaluate(Side::Red, &board, &mut stats), 1);

        let mut evaluator = Evaluator::new(false);
        assert_eq!(evaluator.static_eval(Side::Blue, &board, &mut stats), 1);
        assert_eq!(evaluator.static_eval(Side::Red, &board, &mut stats), -1);
    }

    #[test]
    fn test_evaluate_positive_margin() {
        // Red at (2,1) with 3 spots and (3,2) with 2, Blue in the corner.
        let mut board = Board::new(3).unwrap();
        board.set(0, 1, Side::Blue).unwrap();
        board.set(3, 3, Side::Red).unwrap();
        board.set(7, 2, Side::Red).unwrap();

        let mut stats = SearchStats::new();
        assert_eq!(evaluate(Side::Red, &board, &mut stats), 5);
        assert_eq!(evaluate(Side::Blue, &board, &mut stats), 1);
        assert_eq!(
            Evaluator::new(true).static_eval(Side::Red, &board, &mut stats),
            4
        );
    }

    #[test]
    fn test_filling_move_is_win() {
        // R R
        // . B
        // Red's first move lets Blue sweep the board in reply, but Red's
        // spill from (1,2) takes every square itself.
        let mut board = Board::new(2).unwrap();
        board.set(0, 1, Side::Red).unwrap();
        board.set(1, 2, Side::Red).unwrap();
        board.set(3, 2, Side::Blue).unwrap();

        let mut stats = SearchStats::new();
        assert_eq!(evaluate(Side::Red, &board, &mut stats), WIN);
        assert_eq!(evaluate(Side::Blue, &board, &mut stats), WIN);
        assert_eq!(
            Evaluator::new(false).static_eval(Side::Red, &board, &mut stats),
            0
        );
    }

    #[test]
    fn test_static_eval_is_antisymmetric() {
        let mut board = Board::new(3).unwrap();
        board.set_at(2, 2, 3, Side::Red).unwrap();
        board.set_at(1, 3, 1, Side::Blue).unwrap();

        let mut evaluator = Evaluator::new(false);
        let mut stats = SearchStats::new();
        let red = evaluator.static_eval(Side::Red, &board, &mut stats);
        let blue = evaluator.static_eval(Side::Blue, &board, &mut stats);
        assert_eq!(red, -blue);
    }

    #[test]
    fn test_cache_hits() {
        let mut board = Board::new(3).unwrap();
        board.set_at(2, 2, 2, Side::Blue).unwrap();

        let mut evaluator = Evaluator::new(true);
        let mut stats = SearchStats::new();
        let first = evaluator.static_eval(Side::Red, &board, &mut stats);
        let second = evaluator.static_eval(Side::Red, &board, &mut stats);

        assert_eq!(first, second);
        assert_eq!(stats.evaluations, 1);
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(evaluator.cached(), 1);

        evaluator.clear();
        assert_eq!(evaluator.cached(), 0);
    }
}
