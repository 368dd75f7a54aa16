//! The six triangular corners of the star.
//!
//! Each corner is a 10-cell triangle: rows of 1, 2, 3 and 4 cells, with the
//! single-cell tip pointing away from the hexagonal core. Two corners are
//! homes (`Top` for Player A, `Bottom` for Player B); the other four are
//! transit territory that starts empty and is never owned.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Player};

/// Number of cells in every corner triangle.
pub const CORNER_CELLS: usize = 10;

/// Rows per corner triangle.
const CORNER_ROWS: i32 = 4;

/// A corner triangle of the star.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    /// Rows -4..=-1. Player A's home.
    Top,
    /// Rows 0..=3, left of the core.
    UpperLeft,
    /// Rows 0..=3, right of the core.
    UpperRight,
    /// Rows 5..=8, left of the core.
    LowerLeft,
    /// Rows 5..=8, right of the core.
    LowerRight,
    /// Rows 9..=12. Player B's home.
    Bottom,
}

impl Corner {
    /// All corners, top to bottom.
    pub const ALL: [Corner; 6] = [
        Corner::Top,
        Corner::UpperLeft,
        Corner::UpperRight,
        Corner::LowerLeft,
        Corner::LowerRight,
        Corner::Bottom,
    ];

    /// The player whose marbles start here, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Corner::Top => Some(Player::A),
            Corner::Bottom => Some(Player::B),
            _ => None,
        }
    }

    /// Whether this corner is transit-only territory.
    #[must_use]
    pub const fn is_transit(self) -> bool {
        self.owner().is_none()
    }

    /// The cells of this corner in row-major order.
    ///
    /// ```
    /// use sternhalma::core::Coord;
    /// use sternhalma::zones::Corner;
    ///
    /// let top = Corner::Top.cells();
    /// assert_eq!(top[0], Coord::new(8, -4)); // the tip
    /// assert_eq!(top[9], Coord::new(8, -1));
    /// ```
    #[must_use]
    pub fn cells(self) -> [Coord; CORNER_CELLS] {
        let mut cells = [Coord::new(0, 0); CORNER_CELLS];
        let mut i = 0;

        for r in 0..CORNER_ROWS {
            // Triangles whose tip is on their first row widen as r grows;
            // the others narrow.
            let (xs, y) = match self {
                Corner::Top => ((8 - r)..=8, r - 4),
                Corner::UpperLeft => (0..=(3 - r), r),
                Corner::UpperRight => (9..=(12 - r), r),
                Corner::LowerLeft => ((-1 - r)..=-1, r + 5),
                Corner::LowerRight => ((8 - r)..=8, r + 5),
                Corner::Bottom => (0..=(3 - r), r + 9),
            };
            for x in xs {
                cells[i] = Coord::new(x, y);
                i += 1;
            }
        }

        debug_assert_eq!(i, CORNER_CELLS);
        cells
    }

    /// Whether `coord` lies in this corner.
    #[must_use]
    pub fn contains(self, coord: Coord) -> bool {
        self.cells().contains(&coord)
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Corner::Top => "top",
            Corner::UpperLeft => "upper-left",
            Corner::UpperRight => "upper-right",
            Corner::LowerLeft => "lower-left",
            Corner::LowerRight => "lower-right",
            Corner::Bottom => "bottom",
        };
        write!(f, "{} corner", name)
    }
}
