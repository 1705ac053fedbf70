//! Turn-taking around one authoritative board.

use tracing::{info, warn};

use crate::core::{Board, GameRng, Side, Square};
use crate::error::{BoardError, GameError};
use crate::moves::lowest_legal_move;
use crate::players::{Player, PlayerKind};
use crate::search::SearchConfig;

use super::config::GameConfig;
use super::event::{GameEvent, Listener};

/// What a single `step` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// `side` played `square`; the game goes on.
    Moved { side: Side, square: Square },
    /// The move just played won the game for this side.
    Won(Side),
    /// The side to move is waiting for outside input.
    AwaitingInput(Side),
}

/// A game session.
///
/// Owns the board, one player per side and the session RNG. Only the
/// session mutates the board once play starts, strictly alternating sides.
pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    rng: GameRng,
    search: SearchConfig,
    playing: bool,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("playing", &self.playing)
            .finish_non_exhaustive()
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.size)?,
            players: [config.red.build(&config.search), config.blue.build(&config.search)],
            rng: GameRng::new(config.seed),
            search: config.search,
            playing: false,
            listeners: Vec::new(),
        })
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Register a callback for every subsequent event.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    // === Setup ===

    /// The player seated for `side`.
    #[must_use]
    pub fn player(&self, side: Side) -> Option<&dyn Player> {
        side.player_index().map(|i| self.players[i].as_ref())
    }

    /// Seat `player` for `side`. Stops any game in progress.
    pub fn set_player(&mut self, side: Side, player: Box<dyn Player>) -> Result<(), GameError> {
        let i = side.player_index().ok_or(GameError::NotAPlayer(side))?;
        self.players[i] = player;
        self.playing = false;
        Ok(())
    }

    /// Seat the automated player for `side`.
    pub fn set_auto(&mut self, side: Side) -> Result<(), GameError> {
        self.set_player(side, PlayerKind::Auto.build(&self.search))
    }

    /// Seat a manual player for `side`.
    pub fn set_manual(&mut self, side: Side) -> Result<(), GameError> {
        self.set_player(side, PlayerKind::Manual.build(&self.search))
    }

    /// Restart the session RNG from `seed`.
    pub fn seed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    /// Stop play and empty the board, keeping its size.
    pub fn clear(&mut self) -> Result<(), GameError> {
        self.set_size(self.board.size())
    }

    /// Stop play and replace the board with an empty one of `size`.
    ///
    /// On error nothing changes.
    pub fn set_size(&mut self, size: usize) -> Result<(), GameError> {
        self.board.clear(size)?;
        self.playing = false;
        self.emit(GameEvent::Cleared { size });
        Ok(())
    }

    /// Put `spots` spots for `side` on `(row, col)`. Zero spots clears the
    /// square. Stops play.
    pub fn set_spots(&mut self, row: usize, col: usize, spots: u8, side: Side) -> Result<(), GameError> {
        let (spots, side) = if spots == 0 { (1, Side::Neutral) } else { (spots, side) };
        self.board.set_at(row, col, spots, side)?;
        self.playing = false;
        self.emit(GameEvent::SpotsSet { row, col });
        Ok(())
    }

    // === Play ===

    /// Begin accepting moves. A board that is already won ends the game
    /// straight away.
    pub fn start(&mut self) {
        self.playing = true;
        self.emit(GameEvent::Started);
        self.check_for_win();
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if let Some(winner) = self.board.winner() {
            return Err(GameError::GameOver(winner));
        }
        if !self.playing {
            return Err(GameError::NotPlaying);
        }
        Ok(())
    }

    /// Play `(row, col)` for the side to move.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<StepOutcome, GameError> {
        self.ensure_playing()?;
        let side = self.board.whose_move();
        let square = self
            .board
            .square(row, col)
            .ok_or(BoardError::OffBoardPosition {
                row,
                col,
                size: self.board.size(),
            })?;
        self.commit(side, square)
    }

    /// Ask the side to move for a move and play it.
    ///
    /// An automated player that proposes an illegal square is overruled with
    /// the lowest legal square. A manual player's illegal square is an error.
    pub fn step(&mut self) -> Result<StepOutcome, GameError> {
        self.ensure_playing()?;
        let side = self.board.whose_move();
        let i = side.player_index().ok_or(GameError::NotAPlayer(side))?;
        let player = &mut self.players[i];
        let automated = player.is_automated();
        let proposed = player.choose_move(&self.board, side, &mut self.rng);

        let square = match proposed {
            Some(square) if self.board.is_legal(side, square) => square,
            Some(square) if !automated => {
                return Err(BoardError::IllegalMove { side, square }.into());
            }
            None if !automated => return Ok(StepOutcome::AwaitingInput(side)),
            _ => {
                let fallback = lowest_legal_move(&self.board, side).ok_or(GameError::NoLegalMove(side))?;
                warn!(%side, ?proposed, fallback, "overruling automated move");
                fallback
            }
        };
        self.commit(side, square)
    }

    /// Step until someone wins, a manual player needs input, or `max_moves`
    /// moves have been played. Returns the winner, if any.
    pub fn play(&mut self, max_moves: usize) -> Result<Option<Side>, GameError> {
        for _ in 0..max_moves {
            match self.step()? {
                StepOutcome::Won(side) => return Ok(Some(side)),
                StepOutcome::AwaitingInput(_) => return Ok(None),
                StepOutcome::Moved { .. } => {}
            }
        }
        Ok(self.board.winner())
    }

    fn commit(&mut self, side: Side, square: Square) -> Result<StepOutcome, GameError> {
        self.board.add_spot(side, square)?;
        let (row, col) = (self.board.row(square), self.board.col(square));
        info!(%side, row, col, "move");
        self.emit(GameEvent::Moved { side, row, col });

        Ok(match self.check_for_win() {
            Some(winner) => StepOutcome::Won(winner),
            None => StepOutcome::Moved { side, square },
        })
    }

    /// End play and announce if the board has a winner.
    fn check_for_win(&mut self) -> Option<Side> {
        if !self.playing {
            return None;
        }
        let winner = self.board.winner()?;
        self.playing = false;
        info!(%winner, "game won");
        self.emit(GameEvent::Won(winner));
        Some(winner)
    }
}
