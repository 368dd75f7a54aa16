use crate::core::{Coord, Player};

/// Errors from applying an externally supplied move with
/// [`GameState::play`](crate::core::GameState::play).
///
/// Only the source and destination cells are checked; reachability is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{0} is not on the board")]
    OffBoard(Coord),

    #[error("no marble at {0}")]
    NoMarble(Coord),

    #[error("marble at {coord} belongs to {owner}, not {player}")]
    NotOwned {
        coord: Coord,
        owner: Player,
        player: Player,
    },

    #[error("destination {0} is occupied")]
    Occupied(Coord),
}

/// Errors from validating a search configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
