//! Players and cell occupants.
//!
//! ## Player
//!
//! Exactly two colors are active. `Player::A` starts in the top corner and
//! is the maximizing side of the search; `Player::B` starts in the bottom
//! corner and minimizes.
//!
//! ## Occupant
//!
//! What sits on a playable cell: nothing, or one player's marble.

use serde::{Deserialize, Serialize};

use crate::zones::Corner;

/// One of the two active colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Both players, A first.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Get the other player.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// The corner this player's marbles start in.
    #[must_use]
    pub const fn home(self) -> Corner {
        match self {
            Player::A => Corner::Top,
            Player::B => Corner::Bottom,
        }
    }

    /// The corner this player is racing to fill (the opponent's home).
    #[must_use]
    pub const fn target(self) -> Corner {
        self.other().home()
    }

    /// Sign of this player's travel along `y`: A moves down, B moves up.
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    /// Whether this player maximizes in the search.
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::A)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// The content of a playable cell.
///
/// Off-board coordinates have no occupant at all: board lookups return
/// `None` for them, never `Some(Occupant::Empty)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Marble(Player),
}

impl Occupant {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Whether a marble of either color sits here.
    #[must_use]
    pub const fn is_marble(self) -> bool {
        matches!(self, Occupant::Marble(_))
    }

    /// The owning player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Marble(p) => Some(p),
        }
    }

    /// Single-character symbol used by the board renderer.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::Marble(Player::A) => 'A',
            Occupant::Marble(Player::B) => 'B',
        }
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        Occupant::Marble(player)
    }
}
