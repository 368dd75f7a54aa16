//! Search scores.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Value of a position from Player A's point of view.
///
/// Decided games sit outside the heuristic range: `Loss < Value(_) < Win`
/// for every heuristic value, so no sentinel integer is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Score {
    /// Player B has won.
    Loss,
    /// Heuristic value of an undecided position.
    Value(i64),
    /// Player A has won.
    Win,
}

impl Score {
    /// The score of a game won by `player`.
    #[must_use]
    pub const fn for_winner(player: Player) -> Self {
        match player {
            Player::A => Score::Win,
            Player::B => Score::Loss,
        }
    }

    /// The worst possible outcome for `player`.
    ///
    /// Starting value of a node where `player` is to move.
    #[must_use]
    pub const fn worst_for(player: Player) -> Self {
        match player {
            Player::A => Score::Loss,
            Player::B => Score::Win,
        }
    }

    /// Whether `self` is strictly better than `other` for `player`.
    #[must_use]
    pub fn improves_on(self, other: Score, player: Player) -> bool {
        match player {
            Player::A => self > other,
            Player::B => self < other,
        }
    }

    /// The heuristic value, if the game is undecided.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Score::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Whether the score is a forced result.
    #[must_use]
    pub const fn is_decisive(self) -> bool {
        !matches!(self, Score::Value(_))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss => write!(f, "-inf"),
            Score::Value(v) => write!(f, "{}", v),
            Score::Win => write!(f, "+inf"),
        }
    }
}
