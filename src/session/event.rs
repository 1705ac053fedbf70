//! Session change notifications.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Something that changed in a session, delivered to subscribed listeners
/// after the board has been updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The board was reset to an empty `size` x `size` board.
    Cleared { size: usize },

    /// A square was overwritten during setup.
    SpotsSet { row: usize, col: usize },

    /// Play (re)started.
    Started,

    /// `side` added a spot at `(row, col)` and the cascade has settled.
    Moved { side: Side, row: usize, col: usize },

    /// `side` owns every square.
    Won(Side),
}

/// Callback invoked for each event.
pub type Listener = Box<dyn FnMut(&GameEvent) + Send>;
