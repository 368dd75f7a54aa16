//! Move representation: one marble relocation.
//!
//! A move names only its endpoints. Whether it was a step or a jump chain
//! does not matter once it is applied: the marble leaves `from` and lands on
//! `to`, and no other cell changes.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A marble relocation from `from` to `to`.
///
/// ```
/// use sternhalma::core::{Coord, Move};
///
/// let mv = Move::new(Coord::new(5, -1), Coord::new(5, 0));
/// assert_eq!(mv.reversed(), Move::new(Coord::new(5, 0), Coord::new(5, -1)));
/// assert_eq!(mv.to_string(), "(5, -1) -> (5, 0)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the marble leaves.
    pub from: Coord,

    /// Cell the marble lands on.
    pub to: Coord,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl From<(Coord, Coord)> for Move {
    fn from((from, to): (Coord, Coord)) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_twice_is_identity() {
        let mv = Move::new(Coord::new(1, 2), Coord::new(3, 0));
        assert_eq!(mv.reversed().reversed(), mv);
    }

    #[test]
    fn test_from_tuple() {
        let mv: Move = (Coord::new(0, 0), Coord::new(1, 0)).into();
        assert_eq!(mv.from, Coord::new(0, 0));
        assert_eq!(mv.to, Coord::new(1, 0));
    }

    #[test]
    fn test_serialization() {
        let mv = Move::new(Coord::new(0, 9), Coord::new(0, 8));
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
