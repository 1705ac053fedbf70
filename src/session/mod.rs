//! Game sessions.
//!
//! A [`Game`] seats a [`Player`](crate::players::Player) for each side,
//! owns the authoritative board and the session RNG, and alternates turns.
//! Interested parties subscribe to [`GameEvent`]s instead of watching the
//! board, which stays a plain state container.
//!
//! ```
//! use jump61::core::Side;
//! use jump61::players::PlayerKind;
//! use jump61::session::{Game, GameConfig};
//!
//! let config = GameConfig::default()
//!     .with_size(2)
//!     .with_players(PlayerKind::Random, PlayerKind::Random);
//! let mut game = Game::new(config).unwrap();
//! game.start();
//!
//! let winner = game.play(1_000).unwrap();
//! assert!(matches!(winner, Some(Side::Red) | Some(Side::Blue)));
//! ```

mod config;
mod event;
mod game;

pub use config::GameConfig;
pub use event::{GameEvent, Listener};
pub use game::{Game, StepOutcome};
