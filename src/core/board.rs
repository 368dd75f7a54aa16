//! The star board: a fixed set of playable cells and their occupants.
//!
//! Uses `im::OrdMap` so cloning a board is O(1) and every clone is an
//! independent snapshot. The search clones a board per successor, so this
//! is the hot path.
//!
//! ## Cell Set
//!
//! The key set is fixed at construction and never grows or shrinks.
//! [`Board::set`] and [`Board::swap`] only replace occupants of existing
//! cells; off-board coordinates are rejected, not inserted.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::{Occupant, Player};
use crate::zones::{self, Corner};

/// Mapping from playable cell to occupant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: OrdMap<Coord, Occupant>,
}

impl Board {
    /// Create the canonical opening layout.
    ///
    /// Player A fills the top corner, Player B the bottom corner; the core
    /// and the four transit corners are empty.
    ///
    /// ```
    /// use sternhalma::core::{Board, Player};
    ///
    /// let board = Board::new();
    /// assert_eq!(board.len(), 121);
    /// assert_eq!(board.count(Player::A), 10);
    /// assert_eq!(board.count(Player::B), 10);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty_star();
        for player in Player::ALL {
            for cell in player.home().cells() {
                board.cells.insert(cell, Occupant::Marble(player));
            }
        }
        board
    }

    /// Every playable cell, all empty.
    ///
    /// Starting point for synthetic positions built with [`Board::set`].
    #[must_use]
    pub fn empty_star() -> Self {
        let cells = zones::star_cells()
            .into_iter()
            .map(|c| (c, Occupant::Empty))
            .collect();
        Self { cells }
    }

    /// Look up a cell.
    ///
    /// Returns `None` for off-board coordinates, which is distinct from
    /// `Some(Occupant::Empty)`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Occupant> {
        self.cells.get(&coord).copied()
    }

    /// Whether `coord` is a playable cell.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Whether `coord` is on-board and empty.
    #[must_use]
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Occupant::Empty)
    }

    /// Whether `coord` holds a marble of either color.
    #[must_use]
    pub fn has_marble(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Occupant::is_marble)
    }

    /// Number of playable cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for boards built by this module.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(Coord, Occupant)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Occupant)> + '_ {
        self.cells.iter().map(|(c, o)| (*c, *o))
    }

    /// Cells holding `player`'s marbles, row-major.
    pub fn marbles(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(move |(_, o)| *o == Occupant::Marble(player))
            .map(|(c, _)| c)
    }

    /// Number of marbles `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.marbles(player).count()
    }

    /// Occupants of a corner, in the corner's cell order.
    ///
    /// Corner cells are always on-board, so this never yields off-board
    /// sentinels.
    pub fn corner(&self, corner: Corner) -> impl Iterator<Item = Occupant> + '_ {
        corner
            .cells()
            .into_iter()
            .map(move |c| self.get(c).unwrap_or_default())
    }

    /// Replace the occupant of an existing cell.
    ///
    /// Returns the previous occupant, or `None` (and changes nothing) if
    /// `coord` is off-board.
    pub fn set(&mut self, coord: Coord, occupant: Occupant) -> Option<Occupant> {
        let slot = self.cells.get_mut(&coord)?;
        Some(std::mem::replace(slot, occupant))
    }

    /// Exchange the occupants of two cells.
    ///
    /// Returns false (and changes nothing) if either cell is off-board.
    pub fn swap(&mut self, a: Coord, b: Coord) -> bool {
        let (Some(oa), Some(ob)) = (self.get(a), self.get(b)) else {
            return false;
        };
        self.cells.insert(a, ob);
        self.cells.insert(b, oa);
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one text line per row, offset by half a cell per row so the hex
/// neighbors line up visually.
///
/// With axial coordinates a cell's screen column is `2x + y`; the leftmost
/// cell of the star sits at `(-4, 8)`, column 0.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let min_col = self.cells.keys().map(|c| 2 * c.x + c.y).min().unwrap_or(0);
        let mut row: Option<i32> = None;
        let mut col = min_col;

        for (coord, occupant) in self.iter() {
            if row != Some(coord.y) {
                if row.is_some() {
                    writeln!(f)?;
                }
                row = Some(coord.y);
                col = min_col;
            }
            let target = 2 * coord.x + coord.y;
            while col < target {
                write!(f, " ")?;
                col += 1;
            }
            write!(f, "{}", occupant.symbol())?;
            col += 1;
        }
        Ok(())
    }
}
