//! Move selection for the automated player.
//!
//! `MoveSearch` runs a decision ladder and stops at the first stage that
//! yields a move:
//!
//! 1. **Spill exploit**: squares at capacity that touch an opponent square
//!    also at capacity. Each is played on a private copy and ranked by a
//!    shallow minimax; a move that leaves the opponent with no squares is
//!    taken at once.
//! 2. **Safe tiers**: corners, then edges, then interior squares. The first
//!    square (by index) with room to grow that no opponent neighbor can
//!    immediately overrun.
//! 3. **Minimax**: every legal move, searched `fallback_depth` plies deeper
//!    and scored by the static evaluator.
//!
//! The board passed in is never modified; every hypothetical position is a
//! clone owned by the call that built it.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Board, Side, Square};
use crate::moves::{at_capacity, legal_moves, moves_by_tier, opponent_neighbors, Tier};

use super::config::SearchConfig;
use super::evaluator::{simulate, terminal_score, Evaluator, Score, LOSS, WIN};
use super::stats::SearchStats;

/// Ladder stage that produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Spill,
    Tier(Tier),
    Minimax,
}

/// A chosen square and the stage that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub square: Square,
    pub stage: Stage,
}

/// Result of a minimax node: the best move found there and its score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scored {
    pub square: Option<Square>,
    pub value: Score,
}

impl Scored {
    fn leaf(value: Score) -> Self {
        Self {
            square: None,
            value,
        }
    }
}

/// Automated player search context.
///
/// Owns its configuration, evaluator cache and statistics for the last
/// decision. Reuse one per player to keep allocations warm.
#[derive(Clone, Debug)]
pub struct MoveSearch {
    config: SearchConfig,
    evaluator: Evaluator,
    stats: SearchStats,
}

impl Default for MoveSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl MoveSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config.cache_evaluations),
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics for the most recent decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Square `side` should play on `board`, if it has any legal move.
    pub fn choose_move(&mut self, board: &Board, side: Side) -> Option<Square> {
        self.decide(board, side).map(|d| d.square)
    }

    /// Like `choose_move`, also reporting which stage picked the square.
    pub fn decide(&mut self, board: &Board, side: Side) -> Option<Decision> {
        let start = Instant::now();
        self.stats.reset();
        self.evaluator.clear();

        let decision = if side.is_player() {
            self.run_ladder(board, side)
        } else {
            None
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        match decision {
            Some(d) => debug!(
                %side,
                row = board.row(d.square),
                col = board.col(d.square),
                stage = ?d.stage,
                boards = self.stats.boards_simulated,
                evaluations = self.stats.evaluations,
                time_us = self.stats.time_us,
                "search chose move"
            ),
            None => debug!(%side, "search found no move"),
        }
        decision
    }

    fn run_ladder(&mut self, board: &Board, side: Side) -> Option<Decision> {
        if self.config.spill_exploit {
            if let Some(square) = self.spill_exploit(board, side) {
                return Some(Decision {
                    square,
                    stage: Stage::Spill,
                });
            }
        }
        if self.config.tiered_moves {
            for tier in Tier::ALL {
                if let Some(square) = safe_move(board, side, tier) {
                    return Some(Decision {
                        square,
                        stage: Stage::Tier(tier),
                    });
                }
            }
        }
        self.best_minimax(board, side).map(|square| Decision {
            square,
            stage: Stage::Minimax,
        })
    }

    /// Best chain-capture spill for `side`, if any square qualifies.
    pub fn spill_exploit(&mut self, board: &Board, side: Side) -> Option<Square> {
        let opponent = side.opposite();
        let candidates = spill_candidates(board, side);
        let mut best: Option<(Square, Score)> = None;

        for square in candidates {
            let Some(next) = simulate(board, side, square, &mut self.stats) else {
                continue;
            };
            if next.num_of_side(opponent) == 0 {
                trace!(square, "spill wipes out opponent");
                return Some(square);
            }
            let value = -self.minimax(opponent, &next, self.config.spill_depth, WIN).value;
            trace!(square, value, "spill candidate");
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((square, value));
            }
        }
        best.map(|(square, _)| square)
    }

    /// Highest-scoring legal move under full minimax, ties to the lowest index.
    pub fn best_minimax(&mut self, board: &Board, side: Side) -> Option<Square> {
        self.minimax(side, board, self.config.fallback_depth + 1, WIN)
            .square
    }

    /// Negamax to `depth` plies with a single pruning bound.
    ///
    /// `bound` is the score at which the caller loses interest: once this
    /// node has a move worth at least `bound`, its parent already holds a
    /// better alternative, so the remaining moves are skipped. Pass `WIN` to
    /// search every move. The returned square is `None` at leaves.
    pub fn minimax(&mut self, side: Side, board: &Board, depth: u32, bound: Score) -> Scored {
        self.stats.nodes += 1;
        if let Some(value) = terminal_score(side, board) {
            return Scored::leaf(value);
        }
        if depth == 0 {
            return Scored::leaf(self.evaluator.static_eval(side, board, &mut self.stats));
        }

        let opponent = side.opposite();
        let mut best: Option<Scored> = None;
        for square in legal_moves(board, side) {
            let Some(next) = simulate(board, side, square, &mut self.stats) else {
                continue;
            };
            let cutoff = best.map_or(WIN, |b| -b.value);
            let value = -self.minimax(opponent, &next, depth - 1, cutoff).value;
            if best.map_or(true, |b| value > b.value) {
                best = Some(Scored {
                    square: Some(square),
                    value,
                });
                if value >= bound {
                    break;
                }
            }
        }
        // Only a lost board leaves no legal move, and that is caught above.
        best.unwrap_or(Scored::leaf(LOSS))
    }
}

/// Legal squares for `side` at capacity with an opponent neighbor also at
/// capacity, in index order.
#[must_use]
pub fn spill_candidates(board: &Board, side: Side) -> Vec<Square> {
    legal_moves(board, side)
        .into_iter()
        .filter(|&square| {
            at_capacity(board, square)
                && opponent_neighbors(board, square, side)
                    .iter()
                    .any(|&k| at_capacity(board, k))
        })
        .collect()
}

/// First square of `tier` where `side` can add a spot without spilling and
/// without sitting below a fuller opponent neighbor.
#[must_use]
pub fn safe_move(board: &Board, side: Side, tier: Tier) -> Option<Square> {
    moves_by_tier(board, side, tier).into_iter().find(|&square| {
        let spots = board[square].spots();
        usize::from(spots) < tier.neighbor_count()
            && opponent_neighbors(board, square, side).iter().all(|&k| {
                let theirs = board[k].spots();
                !(usize::from(theirs) <= board.neighbors(k) && spots < theirs)
            })
    })
}
